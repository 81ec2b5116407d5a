use anyhow::Result;
use rand::Rng;
use serde::Deserialize;

use crate::ascii_art::{AsciiArt, AsciiArtMetadata};
use crate::palette::{Palette, DEFAULT_PALETTE};
use crate::palette_render::render_grid;
use crate::permutation::PermutationTable;
use crate::sampler::{sample_grid, Scale, DEFAULT_SCALE};

pub const DEFAULT_WIDTH: usize = 40;
pub const DEFAULT_HEIGHT: usize = 20;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateOptions {
    pub width: usize,
    pub height: usize,
    pub palette: String,
    pub scale: f64,
    /// Fixes the permutation table. Unseeded runs draw fresh entropy.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            palette: DEFAULT_PALETTE.to_owned(),
            scale: DEFAULT_SCALE,
            seed: None,
        }
    }
}

impl GenerateOptions {
    pub fn validated_scale(&self) -> Result<Scale> {
        Scale::new(self.scale)
    }
}

/// Renders `width x height` art at the default scale with fresh entropy.
///
/// Unrecognized palette names render with the default palette.
pub fn generate_ascii(width: usize, height: usize, palette_name: &str) -> String {
    let table = PermutationTable::shuffled(&mut rand::thread_rng());
    render(
        &table,
        width,
        height,
        Palette::resolve(palette_name),
        Scale::DEFAULT,
    )
    .to_text()
}

pub fn generate(options: &GenerateOptions) -> Result<AsciiArt> {
    let scale = options.validated_scale()?;
    let table = match options.seed {
        Some(seed) => PermutationTable::seeded(seed),
        None => PermutationTable::shuffled(&mut rand::thread_rng()),
    };
    Ok(render_with_metadata(&table, options, scale))
}

pub fn generate_with_rng<R: Rng + ?Sized>(
    options: &GenerateOptions,
    rng: &mut R,
) -> Result<AsciiArt> {
    let scale = options.validated_scale()?;
    let table = PermutationTable::shuffled(rng);
    Ok(render_with_metadata(&table, options, scale))
}

/// Renders against a caller-owned table; identical inputs give identical art.
pub fn generate_with_table(
    options: &GenerateOptions,
    table: &PermutationTable,
) -> Result<AsciiArt> {
    let scale = options.validated_scale()?;
    Ok(render_with_metadata(table, options, scale))
}

fn render_with_metadata(
    table: &PermutationTable,
    options: &GenerateOptions,
    scale: Scale,
) -> AsciiArt {
    let palette = Palette::resolve(&options.palette);
    render(table, options.width, options.height, palette, scale).with_metadata(AsciiArtMetadata {
        width: options.width,
        height: options.height,
        palette: palette.name,
        scale: scale.get(),
        seed: options.seed,
    })
}

fn render(
    table: &PermutationTable,
    width: usize,
    height: usize,
    palette: &Palette,
    scale: Scale,
) -> AsciiArt {
    tracing::debug!(
        width,
        height,
        palette = palette.name,
        scale = scale.get(),
        "generating ascii noise"
    );
    let grid = sample_grid(table, width, height, scale);
    render_grid(&grid, palette)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{generate, generate_ascii, generate_with_rng, generate_with_table, GenerateOptions};
    use crate::error_codes::{error_code, ErrorCode};
    use crate::palette::Palette;
    use crate::permutation::PermutationTable;

    #[test]
    fn defaults_match_documented_values() {
        let options = GenerateOptions::default();
        assert_eq!((options.width, options.height), (40, 20));
        assert_eq!(options.palette, "default");
        assert_eq!(options.scale, 10.0);
        assert_eq!(options.seed, None);
    }

    #[test]
    fn generate_ascii_has_requested_shape() {
        let text = generate_ascii(40, 20, "cloudy");
        let lines = text.split('\n').collect::<Vec<_>>();
        assert_eq!(lines.len(), 20);
        assert!(lines.iter().all(|line| line.chars().count() == 40));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn single_cell_uses_default_ramp() {
        let text = generate_ascii(1, 1, "default");
        assert_eq!(text.chars().count(), 1);
        assert!(" .:-=+*#%@".contains(&text));
    }

    #[test]
    fn zero_dimensions_yield_empty_string() {
        assert_eq!(generate_ascii(0, 20, "default"), "");
        assert_eq!(generate_ascii(40, 0, "forest"), "");
        assert_eq!(generate_ascii(0, 0, "desert"), "");
    }

    #[test]
    fn unknown_palette_renders_like_default() {
        let table = PermutationTable::seeded(8);
        let unknown = GenerateOptions {
            palette: "lava".to_owned(),
            ..GenerateOptions::default()
        };
        let art = generate_with_table(&unknown, &table).expect("generation should succeed");
        let baseline = generate_with_table(&GenerateOptions::default(), &table)
            .expect("generation should succeed");

        assert_eq!(art.to_text(), baseline.to_text());
        assert_eq!(art.metadata.map(|meta| meta.palette), Some("default"));
    }

    #[test]
    fn invalid_scale_fails_before_rendering() {
        for scale in [0.0, -2.0] {
            let options = GenerateOptions {
                scale,
                seed: Some(1),
                ..GenerateOptions::default()
            };
            let error = generate(&options).unwrap_err();
            assert_eq!(error_code(&error), Some(ErrorCode::InvalidScale));
        }
    }

    #[test]
    fn tiny_scale_renders_without_overflow() {
        let options = GenerateOptions {
            width: 2,
            height: 2,
            scale: 1e-300,
            seed: Some(1),
            ..GenerateOptions::default()
        };
        let art = generate(&options).expect("tiny positive scale is valid");
        assert_eq!(art.lines().len(), 2);
        assert!(art.lines().iter().all(|line| line.chars().count() == 2));
    }

    #[test]
    fn metadata_keeps_requested_size_when_nothing_renders() {
        let options = GenerateOptions {
            width: 0,
            height: 5,
            palette: "no-such-palette".to_owned(),
            seed: Some(2),
            ..GenerateOptions::default()
        };
        let art = generate(&options).expect("zero width is valid");
        assert_eq!((art.width(), art.height()), (0, 0));
        assert_eq!(art.height(), art.lines().len());

        let meta = art.metadata.expect("generate attaches metadata");
        assert_eq!((meta.width, meta.height), (0, 5));
        assert_eq!(meta.palette, "default");
        assert_eq!(meta.seed, Some(2));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let options = GenerateOptions {
            seed: Some(1234),
            palette: "desert".to_owned(),
            ..GenerateOptions::default()
        };
        let first = generate(&options).expect("generation should succeed");
        let second = generate(&options).expect("generation should succeed");
        assert_eq!(first.to_text(), second.to_text());
        assert_eq!(first.metadata.and_then(|meta| meta.seed), Some(1234));
    }

    #[test]
    fn injected_rng_drives_the_table() {
        let options = GenerateOptions {
            width: 24,
            height: 8,
            scale: 3.0,
            ..GenerateOptions::default()
        };
        let first = generate_with_rng(&options, &mut StdRng::seed_from_u64(99))
            .expect("generation should succeed");
        let second = generate_with_rng(&options, &mut StdRng::seed_from_u64(99))
            .expect("generation should succeed");
        assert_eq!(first.to_text(), second.to_text());

        let palette = Palette::default_palette();
        assert!(first.to_text().chars().all(|glyph| glyph == '\n' || palette.contains(glyph)));
    }
}
