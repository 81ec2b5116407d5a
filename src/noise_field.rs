//! Simplified 2D Perlin gradient noise over a [`PermutationTable`].
//!
//! The gradient set is picked from hash bits rather than a reference
//! gradient table, so values are self-consistent but will not match other
//! Perlin implementations.

use crate::permutation::PermutationTable;

/// Quintic smoothstep `6t^5 - 15t^4 + 10t^3`.
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product of a hash-selected gradient with the offset `(x, y)`.
///
/// The low four bits choose which offset feeds each term and the sign of
/// each term.
pub fn gradient(hash: u8, x: f64, y: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 { y } else { x };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    u + v
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    BottomLeft,
    TopLeft,
    BottomRight,
    TopRight,
}

impl Corner {
    fn lattice_offset(self) -> (i64, i64) {
        match self {
            Self::BottomLeft => (0, 0),
            Self::TopLeft => (0, 1),
            Self::BottomRight => (1, 0),
            Self::TopRight => (1, 1),
        }
    }
}

/// Lattice cell and in-cell offset of a sample point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPosition {
    pub x: i64,
    pub y: i64,
    pub xf: f64,
    pub yf: f64,
}

impl CellPosition {
    pub fn locate(x: f64, y: f64) -> Self {
        let cell_x = x.floor();
        let cell_y = y.floor();
        Self {
            x: cell_x as i64,
            y: cell_y as i64,
            xf: x - cell_x,
            yf: y - cell_y,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NoiseField<'a> {
    table: &'a PermutationTable,
}

impl<'a> NoiseField<'a> {
    pub fn new(table: &'a PermutationTable) -> Self {
        Self { table }
    }

    /// Gradient contribution of one corner of `cell` toward the sample point.
    pub fn corner_contribution(&self, cell: CellPosition, corner: Corner) -> f64 {
        let (dx, dy) = corner.lattice_offset();
        // huge coordinates saturate to i64::MAX; the lattice wraps at 256 anyway
        let hash = self
            .table
            .hash(cell.x.wrapping_add(dx), cell.y.wrapping_add(dy));
        gradient(hash, cell.xf - dx as f64, cell.yf - dy as f64)
    }

    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let cell = CellPosition::locate(x, y);
        let u = fade(cell.xf);
        let v = fade(cell.yf);

        let bottom_left = self.corner_contribution(cell, Corner::BottomLeft);
        let bottom_right = self.corner_contribution(cell, Corner::BottomRight);
        let top_left = self.corner_contribution(cell, Corner::TopLeft);
        let top_right = self.corner_contribution(cell, Corner::TopRight);

        let bottom = lerp(bottom_left, bottom_right, u);
        let top = lerp(top_left, top_right, u);
        lerp(bottom, top, v)
    }
}
