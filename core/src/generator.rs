use alloc::vec::Vec;
use rand::prelude::*;
use rand::rngs::SmallRng;

use crate::*;

pub trait MinefieldGenerator {
    fn generate(&self, config: GameConfig, rng: &mut SmallRng) -> Result<Board>;
}

/// Purely random placement by rejection sampling.
///
/// Identifiers are drawn from `1..total`, so the cell with identifier 0 never receives a mine from this generator.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RejectionSamplingGenerator;

impl MinefieldGenerator for RejectionSamplingGenerator {
    fn generate(&self, config: GameConfig, rng: &mut SmallRng) -> Result<Board> {
        let total = config.total_cells();
        let mut mine_ids: Vec<CellCount> = Vec::with_capacity(config.mines.into());

        while (mine_ids.len() as CellCount) < config.mines {
            let candidate = rng.random_range(1..total);
            if !mine_ids.contains(&candidate) {
                mine_ids.push(candidate);
            }
        }
        log::trace!("mines placed at {:?}", mine_ids);

        Board::from_mine_identifiers(config.size, &mine_ids)
    }
}

/// Moves the mine at `from` onto another unmined cell, drawn the same way the generator draws.
///
/// Returns the new mine position. Falls back to identifier 0 when every other cell in the sampling range is taken.
pub(crate) fn relocate_mine(board: &mut Board, from: Coord2, rng: &mut SmallRng) -> Coord2 {
    let size = board.size();
    let total = board.total_cells();
    let from_id = identifier_of(from, size);

    let has_candidate = board
        .iter()
        .any(|cell| cell.identifier() != 0 && cell.identifier() != from_id && !cell.has_mine());

    let target = if has_candidate {
        loop {
            let candidate = rng.random_range(1..total);
            let cell = &board[coords_of(candidate, size)];
            if candidate != from_id && !cell.has_mine() {
                break candidate;
            }
        }
    } else {
        log::warn!("no free cell left to relocate the mine to, using cell 0");
        0
    };

    let to = coords_of(target, size);
    board.cell_mut(from).has_mine = false;
    board.cell_mut(to).has_mine = true;
    board.recompute_adjacency();
    to
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng(seed: u64) -> SmallRng {
        SmallRng::seed_from_u64(seed)
    }

    #[test]
    fn places_exact_mine_count() {
        for seed in 0..32 {
            let config = GameConfig::new((10, 10), 15).unwrap();
            let board = RejectionSamplingGenerator.generate(config, &mut rng(seed)).unwrap();
            assert_eq!(board.mine_count(), 15);
            assert_eq!(board.size(), (10, 10));
        }
    }

    #[test]
    fn first_identifier_is_never_mined() {
        // every cell except identifier 0 must be mined on a board with one spare cell
        let config = GameConfig::new((3, 3), 8).unwrap();
        for seed in 0..8 {
            let board = RejectionSamplingGenerator.generate(config, &mut rng(seed)).unwrap();
            assert!(!board.by_identifier(0).unwrap().has_mine());
            assert_eq!(board.mine_count(), 8);
        }
    }

    #[test]
    fn same_seed_same_board() {
        let config = GameConfig::DEFAULT;
        let a = RejectionSamplingGenerator.generate(config, &mut rng(42)).unwrap();
        let b = RejectionSamplingGenerator.generate(config, &mut rng(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn relocation_conserves_mine_count() {
        let mut board = Board::from_mine_coords((3, 3), &[(1, 1), (2, 2)]).unwrap();
        let to = relocate_mine(&mut board, (1, 1), &mut rng(7));

        assert_ne!(to, (1, 1));
        assert_ne!(to, (2, 2));
        assert!(!board[(1, 1)].has_mine());
        assert!(board[to].has_mine());
        assert_eq!(board.mine_count(), 2);
        assert_eq!(board[(1, 1)].adjacent_mine_count(), board.count_adjacent_mines((1, 1)));
    }

    #[test]
    fn relocation_falls_back_to_first_cell_when_full() {
        let mut board = Board::from_mine_identifiers((2, 2), &[1, 2, 3]).unwrap();
        let to = relocate_mine(&mut board, (0, 1), &mut rng(1));

        assert_eq!(to, (0, 0));
        assert_eq!(board.mine_count(), 3);
        assert!(!board[(0, 1)].has_mine());
    }
}
