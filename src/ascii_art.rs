use serde::Serialize;

/// How a piece of art was produced. Carried alongside the text so callers
/// can reproduce it. `width` and `height` are the requested grid size, which
/// differs from the rendered size when either is zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AsciiArtMetadata {
    pub width: usize,
    pub height: usize,
    pub palette: &'static str,
    pub scale: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AsciiArt {
    width: usize,
    lines: Vec<String>,
    pub metadata: Option<AsciiArtMetadata>,
}

impl AsciiArt {
    /// Art with no lines. Used whenever either dimension is zero.
    pub fn empty() -> Self {
        Self {
            width: 0,
            lines: Vec::new(),
            metadata: None,
        }
    }

    /// Takes lines that already have exactly `width` characters each.
    pub(crate) fn from_rendered_lines(lines: Vec<String>, width: usize) -> Self {
        if lines.is_empty() {
            return Self::empty();
        }
        Self {
            width,
            lines,
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: AsciiArtMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Characters per rendered line; 0 when nothing was rendered.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines joined with `\n`, no trailing newline.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

impl std::fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}
