use serde::Serialize;

pub const DEFAULT_PALETTE: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub name: &'static str,
    /// Sparse to dense, one ASCII glyph per level.
    pub ramp: &'static str,
    pub description: &'static str,
}

pub const PALETTES: &[Palette] = &[
    Palette {
        name: "cloudy",
        ramp: " .:-=+*#%@",
        description: "Soft ten-step ramp for drifting cloud banks.",
    },
    Palette {
        name: "forest",
        ramp: " .^~|T#%@",
        description: "Grass tufts and tree glyphs thickening into canopy.",
    },
    Palette {
        name: "desert",
        ramp: " .:~-+=*#",
        description: "Low-contrast dunes; tops out below full density.",
    },
    Palette {
        name: DEFAULT_PALETTE,
        ramp: " .:-=+*#%@",
        description: "General purpose density ramp.",
    },
];

impl Palette {
    pub fn lookup(name: &str) -> Option<&'static Palette> {
        PALETTES.iter().find(|palette| palette.name == name)
    }

    pub fn default_palette() -> &'static Palette {
        // PALETTES always carries the default entry
        &PALETTES[PALETTES.len() - 1]
    }

    /// Unknown names fall back to the default palette without error.
    pub fn resolve(name: &str) -> &'static Palette {
        Self::lookup(name).unwrap_or_else(|| {
            tracing::debug!(requested = name, "unknown palette, using default");
            Self::default_palette()
        })
    }

    pub fn glyphs(&self) -> &'static [u8] {
        self.ramp.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.ramp.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ramp.is_empty()
    }

    pub fn contains(&self, character: char) -> bool {
        self.ramp.contains(character)
    }
}

pub fn palette_names() -> Vec<&'static str> {
    PALETTES.iter().map(|palette| palette.name).collect()
}

pub fn render_palette_listing() -> String {
    let mut output = String::new();
    output.push_str("ASCII NOISE PALETTES\n");
    output.push_str("Unknown names render with the default palette.\n");

    for palette in PALETTES {
        output.push('\n');
        output.push_str("- name: ");
        output.push_str(palette.name);
        output.push('\n');
        output.push_str("  ramp: \"");
        output.push_str(palette.ramp);
        output.push_str("\"\n");
        output.push_str("  levels: ");
        output.push_str(&palette.len().to_string());
        output.push('\n');
        output.push_str("  description: ");
        output.push_str(palette.description);
        output.push('\n');
    }

    output
}
