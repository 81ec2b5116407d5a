use crate::ascii_art::AsciiArt;
use crate::palette::Palette;
use crate::sampler::NoiseGrid;

/// Maps a sample from its nominal [-1, 1] range onto [0, 1].
///
/// Samples can overshoot slightly, so the result is clamped.
pub fn normalize_sample(value: f64) -> f64 {
    ((value + 1.0) / 2.0).clamp(0.0, 1.0)
}

/// `floor(normalized * (levels - 1))`, kept inside the ramp.
pub fn palette_index(normalized: f64, levels: usize) -> usize {
    if levels <= 1 {
        return 0;
    }
    let top = levels - 1;
    // NaN casts to 0
    ((normalized * top as f64).floor() as usize).min(top)
}

pub fn render_grid(grid: &NoiseGrid, palette: &Palette) -> AsciiArt {
    if grid.is_empty() || palette.is_empty() {
        return AsciiArt::empty();
    }

    let glyphs = palette.glyphs();
    let lines = grid
        .rows()
        .map(|row| {
            row.iter()
                .map(|&value| {
                    let index = palette_index(normalize_sample(value), glyphs.len());
                    char::from(glyphs[index])
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>();

    AsciiArt::from_rendered_lines(lines, grid.width())
}

#[cfg(test)]
mod tests {
    use super::{normalize_sample, palette_index, render_grid};
    use crate::palette::Palette;
    use crate::permutation::PermutationTable;
    use crate::sampler::{sample_grid, Scale};

    #[test]
    fn normalize_clamps_overshoot() {
        assert_eq!(normalize_sample(-1.0), 0.0);
        assert_eq!(normalize_sample(0.0), 0.5);
        assert_eq!(normalize_sample(1.0), 1.0);
        assert_eq!(normalize_sample(1.4), 1.0);
        assert_eq!(normalize_sample(-1.7), 0.0);
    }

    #[test]
    fn index_spans_whole_ramp() {
        assert_eq!(palette_index(0.0, 10), 0);
        assert_eq!(palette_index(0.5, 10), 4);
        assert_eq!(palette_index(0.999, 10), 8);
        assert_eq!(palette_index(1.0, 10), 9);
        assert_eq!(palette_index(f64::NAN, 10), 0);
        assert_eq!(palette_index(0.7, 1), 0);
    }

    #[test]
    fn rendered_rows_use_only_palette_glyphs() {
        let table = PermutationTable::seeded(21);
        let grid = sample_grid(&table, 30, 12, Scale::new(3.0).expect("valid scale"));
        let palette = Palette::resolve("forest");
        let art = render_grid(&grid, palette);

        assert_eq!(art.lines().len(), 12);
        for line in art.lines() {
            assert_eq!(line.chars().count(), 30);
            assert!(line.chars().all(|glyph| palette.contains(glyph)));
        }
    }

    #[test]
    fn zero_sized_grids_render_empty_text() {
        let table = PermutationTable::identity();
        let palette = Palette::default_palette();
        for (width, height) in [(0, 3), (3, 0)] {
            let art = render_grid(&sample_grid(&table, width, height, Scale::DEFAULT), palette);
            assert_eq!(art.to_text(), "");
            assert_eq!(art.height(), art.lines().len());
            assert_eq!((art.width(), art.height()), (0, 0));
        }
    }
}
