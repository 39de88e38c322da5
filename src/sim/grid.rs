//! Cell <-> pixel conversion for the maze grid

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{COLUMN_COUNT, ROW_COUNT, TILE_SIZE};

/// Immutable board dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridGeometry {
    pub tile_size: f32,
    pub rows: usize,
    pub columns: usize,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self::REFERENCE
    }
}

impl GridGeometry {
    /// The 21x19 board with 32px tiles
    pub const REFERENCE: GridGeometry = GridGeometry {
        tile_size: TILE_SIZE,
        rows: ROW_COUNT,
        columns: COLUMN_COUNT,
    };

    pub fn new(tile_size: f32, rows: usize, columns: usize) -> Self {
        Self {
            tile_size,
            rows,
            columns,
        }
    }

    /// Board width in pixels
    #[inline]
    pub fn board_width(&self) -> f32 {
        self.columns as f32 * self.tile_size
    }

    /// Board height in pixels
    #[inline]
    pub fn board_height(&self) -> f32 {
        self.rows as f32 * self.tile_size
    }

    /// Pixel position of a cell's top-left corner
    #[inline]
    pub fn cell_origin(&self, row: usize, col: usize) -> Vec2 {
        Vec2::new(col as f32 * self.tile_size, row as f32 * self.tile_size)
    }

    /// Cell containing a pixel position, `None` when off the board
    /// (e.g. an entity halfway through the tunnel).
    pub fn cell_at(&self, pos: Vec2) -> Option<(usize, usize)> {
        if pos.x < 0.0 || pos.y < 0.0 {
            return None;
        }
        let col = (pos.x / self.tile_size).floor() as usize;
        let row = (pos.y / self.tile_size).floor() as usize;
        (row < self.rows && col < self.columns).then_some((row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_board_size() {
        let grid = GridGeometry::REFERENCE;
        assert_eq!(grid.board_width(), 608.0);
        assert_eq!(grid.board_height(), 672.0);
    }

    #[test]
    fn test_cell_round_trip() {
        let grid = GridGeometry::REFERENCE;
        let origin = grid.cell_origin(15, 9);
        assert_eq!(origin, Vec2::new(288.0, 480.0));
        assert_eq!(grid.cell_at(origin), Some((15, 9)));
        // Anywhere inside the tile maps back to it
        assert_eq!(grid.cell_at(origin + Vec2::splat(31.9)), Some((15, 9)));
    }

    #[test]
    fn test_cell_at_off_board() {
        let grid = GridGeometry::REFERENCE;
        assert_eq!(grid.cell_at(Vec2::new(-1.0, 10.0)), None);
        assert_eq!(grid.cell_at(Vec2::new(grid.board_width(), 10.0)), None);
        assert_eq!(grid.cell_at(Vec2::new(10.0, grid.board_height())), None);
    }
}
