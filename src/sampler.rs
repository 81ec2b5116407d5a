use anyhow::{anyhow, Result};

use crate::error_codes::CodedError;
use crate::noise_field::NoiseField;
use crate::permutation::PermutationTable;

pub const DEFAULT_SCALE: f64 = 10.0;

/// Feature-size divisor. Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale(f64);

impl Scale {
    pub const DEFAULT: Scale = Scale(DEFAULT_SCALE);

    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(anyhow!(CodedError::invalid_scale(value)));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Row-major `height x width` block of noise samples.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseGrid {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl NoiseGrid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        if row >= self.height || column >= self.width {
            return None;
        }
        self.values.get(row * self.width + column).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // chunks_exact panics on a zero chunk size
        let width = self.width.max(1);
        self.values
            .chunks_exact(width)
            .take(if self.width == 0 { 0 } else { self.height })
    }
}

/// Evaluates the field at `(column / scale, row / scale)` for every cell,
/// all against the one table the caller passes in.
pub fn sample_grid(
    table: &PermutationTable,
    width: usize,
    height: usize,
    scale: Scale,
) -> NoiseGrid {
    let field = NoiseField::new(table);
    let divisor = scale.get();

    let total = width.saturating_mul(height);
    let mut values = Vec::with_capacity(total);
    for row in 0..height {
        let y = row as f64 / divisor;
        for column in 0..width {
            let x = column as f64 / divisor;
            values.push(field.sample(x, y));
        }
    }

    NoiseGrid {
        width,
        height,
        values,
    }
}
