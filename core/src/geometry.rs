use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Half-open containment, so adjacent tiles never share an edge point.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.x <= x && x < self.x + self.width && self.y <= y && y < self.y + self.height
    }
}

/// Pixel layout of the board on the drawing surface.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardGeometry {
    pub cell_width: f64,
    pub cell_height: f64,
    /// Top-left corner of cell `(0, 0)`.
    pub origin: (f64, f64),
    /// Height of the indicator strip drawn below the board.
    pub status_height: f64,
}

impl BoardGeometry {
    pub const DEFAULT: Self = Self {
        cell_width: 40.,
        cell_height: 40.,
        origin: (0., 0.),
        status_height: 30.,
    };

    pub fn cell_rect(&self, (column, row): Coord2) -> Rect {
        Rect {
            x: self.origin.0 + f64::from(column) * self.cell_width,
            y: self.origin.1 + f64::from(row) * self.cell_height,
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    pub fn board_rect(&self, (columns, rows): Coord2) -> Rect {
        Rect {
            x: self.origin.0,
            y: self.origin.1,
            width: f64::from(columns) * self.cell_width,
            height: f64::from(rows) * self.cell_height,
        }
    }

    pub fn status_rect(&self, size: Coord2) -> Rect {
        let board = self.board_rect(size);
        Rect {
            x: board.x,
            y: board.y + board.height,
            width: board.width,
            height: self.status_height,
        }
    }

    /// Size of the whole drawing surface: board plus status strip.
    pub fn surface_size(&self, size: Coord2) -> (f64, f64) {
        let board = self.board_rect(size);
        (
            board.x + board.width,
            board.y + board.height + self.status_height,
        )
    }

    /// Finds the cell under a pixel, testing cells in identifier order and taking the first hit.
    pub fn hit_test(&self, board: &Board, x: f64, y: f64) -> Option<Coord2> {
        board
            .iter()
            .map(Cell::coords)
            .find(|&coords| self.cell_rect(coords).contains(x, y))
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::DEFAULT
    }
}
