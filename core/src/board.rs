use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Fixed-size grid of cells, indexed by `(column, row)`.
///
/// The grid is stored with shape `(columns, rows)` in standard layout, so a cell's identifier is also its offset in
/// the backing storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// Builds a board where exactly the cells named in `mine_ids` hold a mine, then computes adjacency counts.
    ///
    /// Repeated identifiers count once. The board must end up with at least one mine and one safe cell.
    pub fn from_mine_identifiers(size: Coord2, mine_ids: &[CellCount]) -> Result<Self> {
        let total = area(size.0, size.1);
        if mine_ids.iter().any(|&id| id >= total) {
            return Err(GameError::InvalidCoords);
        }

        let mut mine_ids = mine_ids.to_vec();
        mine_ids.sort_unstable();
        mine_ids.dedup();
        GameConfig::new(size, mine_ids.len() as CellCount)?;

        let cells = Array2::from_shape_fn(size.to_nd_index(), |(column, row)| {
            let coords = (column as Coord, row as Coord);
            let identifier = identifier_of(coords, size);
            Cell::new(coords, identifier, mine_ids.binary_search(&identifier).is_ok())
        });

        let mut board = Self { cells };
        board.recompute_adjacency();
        Ok(board)
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_ids = alloc::vec::Vec::with_capacity(mine_coords.len());
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_ids.push(identifier_of(coords, size));
        }
        Self::from_mine_identifiers(size, &mine_ids)
    }

    pub fn size(&self) -> Coord2 {
        let (columns, rows) = self.cells.dim();
        (columns as Coord, rows as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.has_mine).count() as CellCount
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    pub fn by_identifier(&self, identifier: CellCount) -> Option<&Cell> {
        self.cell(coords_of(identifier, self.size()))
            .filter(|_| identifier < self.total_cells())
    }

    /// Cells in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn neighbors(&self, coords: Coord2) -> Neighbors {
        neighbors(coords, self.size())
    }

    /// Counts mined cells around `coords`, the cell itself excluded.
    pub fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        self.neighbors(coords)
            .filter(|&pos| self[pos].has_mine)
            .count() as u8
    }

    pub(crate) fn recompute_adjacency(&mut self) {
        let (columns, rows) = self.size();
        for column in 0..columns {
            for row in 0..rows {
                let count = self.count_adjacent_mines((column, row));
                self.cell_mut((column, row)).adjacent_mine_count = count;
            }
        }
    }

    /// Number of cells without a mine that are still unrevealed.
    pub fn safe_cells_left(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| !cell.has_mine && !cell.is_revealed)
            .count() as CellCount
    }

    pub(crate) fn reveal_all(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.is_revealed = true;
        }
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    /// Brute-force count over every cell on the board, independent of the neighbor iterator.
    fn reference_count(mines: &[Coord2], (c, r): Coord2) -> u8 {
        mines
            .iter()
            .filter(|&&(mc, mr)| (mc, mr) != (c, r) && mc.abs_diff(c) <= 1 && mr.abs_diff(r) <= 1)
            .count() as u8
    }

    #[test]
    fn adjacency_matches_brute_force_reference() {
        let mines = [(0, 0), (2, 1), (1, 2)];
        let board = Board::from_mine_coords((3, 3), &mines).unwrap();

        for cell in board.iter() {
            assert_eq!(
                cell.adjacent_mine_count(),
                reference_count(&mines, cell.coords()),
                "cell {:?}",
                cell.coords()
            );
        }
        assert_eq!(board[(1, 1)].adjacent_mine_count(), 3);
        assert_eq!(board[(2, 2)].adjacent_mine_count(), 2);
    }

    #[test]
    fn mined_cell_does_not_count_itself() {
        let board = Board::from_mine_coords((3, 3), &[(1, 1)]).unwrap();
        assert_eq!(board[(1, 1)].adjacent_mine_count(), 0);
        assert_eq!(board[(0, 0)].adjacent_mine_count(), 1);
    }

    #[test]
    fn identifiers_follow_storage_order() {
        let board = Board::from_mine_identifiers((3, 2), &[4]).unwrap();
        let ids: Vec<_> = board.iter().map(Cell::identifier).collect();
        assert_eq!(ids, [0, 1, 2, 3, 4, 5]);
        assert_eq!(board.by_identifier(4).unwrap().coords(), (2, 0));
        assert!(board.by_identifier(4).unwrap().has_mine());
        assert!(board.by_identifier(6).is_none());
    }

    #[test]
    fn rejects_out_of_range_mines() {
        assert_eq!(
            Board::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(
            Board::from_mine_identifiers((2, 2), &[4]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn rejects_boards_without_a_mine_or_a_safe_cell() {
        assert_eq!(
            Board::from_mine_coords((2, 1), &[(0, 0), (1, 0)]),
            Err(GameError::TooManyMines)
        );
        assert_eq!(Board::from_mine_coords((2, 2), &[]), Err(GameError::NoMines));
        assert_eq!(
            Board::from_mine_identifiers((2, 2), &[0, 1, 2, 3]),
            Err(GameError::TooManyMines)
        );
    }

    #[test]
    fn repeated_mines_count_once() {
        let board = Board::from_mine_identifiers((2, 2), &[1, 1, 3, 1]).unwrap();
        assert_eq!(board.mine_count(), 2);
        assert!(board.by_identifier(1).unwrap().has_mine());
        assert!(board.by_identifier(3).unwrap().has_mine());
        assert_eq!(board.safe_cells_left(), 2);

        // duplicates do not hide a full board
        assert_eq!(
            Board::from_mine_coords((2, 1), &[(0, 0), (1, 0), (0, 0)]),
            Err(GameError::TooManyMines)
        );
    }

    #[test]
    fn safe_cells_left_ignores_mines() {
        let mut board = Board::from_mine_coords((2, 2), &[(0, 0)]).unwrap();
        assert_eq!(board.safe_cells_left(), 3);
        board.cell_mut((1, 1)).is_revealed = true;
        assert_eq!(board.safe_cells_left(), 2);
        board.reveal_all();
        assert_eq!(board.safe_cells_left(), 0);
    }
}
