use serde::{Deserialize, Serialize};

use crate::*;

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    Flagged,
    Revealed,
}

/// A single board tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    column: Coord,
    row: Coord,
    identifier: CellCount,
    pub(crate) has_mine: bool,
    pub(crate) is_flagged: bool,
    pub(crate) is_revealed: bool,
    pub(crate) adjacent_mine_count: u8,
}

impl Cell {
    pub(crate) const fn new((column, row): Coord2, identifier: CellCount, has_mine: bool) -> Self {
        Self {
            column,
            row,
            identifier,
            has_mine,
            is_flagged: false,
            is_revealed: false,
            adjacent_mine_count: 0,
        }
    }

    pub const fn column(&self) -> Coord {
        self.column
    }

    pub const fn row(&self) -> Coord {
        self.row
    }

    pub const fn coords(&self) -> Coord2 {
        (self.column, self.row)
    }

    pub const fn identifier(&self) -> CellCount {
        self.identifier
    }

    pub const fn has_mine(&self) -> bool {
        self.has_mine
    }

    pub const fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    pub const fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub const fn adjacent_mine_count(&self) -> u8 {
        self.adjacent_mine_count
    }

    pub const fn state(&self) -> CellState {
        if self.is_revealed {
            CellState::Revealed
        } else if self.is_flagged {
            CellState::Flagged
        } else {
            CellState::Hidden
        }
    }
}
