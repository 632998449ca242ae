//! Canvas grid: 2D matrix of 3-bit color codes.
//!
//! The grid is the primary data model for the device. It owns a flat vector
//! of color codes indexed by `(x, y)` with a fixed 256×256 geometry, sized so
//! coordinates are exactly `u8` — every representable coordinate is in range
//! by construction. Range checking for unvalidated bus words happens one
//! layer up, in [`Frame::apply`](crate::frame::Frame::apply).

use crate::color::ColorCode;

/// Grid side length. Coordinates span `0..=255` on both axes.
pub const GRID_SIDE: u16 = 256;

/// 256×256 canvas of color codes, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<ColorCode>,
}

impl Grid {
    /// Create a new grid with every cell [`ColorCode::Black`].
    pub fn new() -> Self {
        Self {
            cells: vec![ColorCode::Black; GRID_SIDE as usize * GRID_SIDE as usize],
        }
    }

    fn index(x: u8, y: u8) -> usize {
        y as usize * GRID_SIDE as usize + x as usize
    }

    /// Read the cell at `(x, y)`.
    pub fn get(&self, x: u8, y: u8) -> ColorCode {
        self.cells[Self::index(x, y)]
    }

    /// Write `code` into the cell at `(x, y)`.
    pub fn set(&mut self, x: u8, y: u8, code: ColorCode) {
        self.cells[Self::index(x, y)] = code;
    }

    /// Reset every cell to [`ColorCode::Black`].
    pub fn clear(&mut self) {
        self.cells.fill(ColorCode::Black);
    }

    /// Cells of row `y`, ordered by x. For host renderers.
    pub fn row(&self, y: u8) -> &[ColorCode] {
        let start = Self::index(0, y);
        &self.cells[start..start + GRID_SIDE as usize]
    }

    /// True when every cell is [`ColorCode::Black`].
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&c| c == ColorCode::Black)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
