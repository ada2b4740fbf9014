use alloc::collections::{BTreeSet, VecDeque};
use rand::prelude::*;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// What happens when the very first reveal of a session lands on a mine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FirstClickPolicy {
    /// Move the mine somewhere else and recompute the counts before revealing.
    #[default]
    Relocate,
    /// Leave the board as generated, the first click may lose.
    Unprotected,
}

/// One game from generation to a terminal status.
///
/// All state lives here, callers own the session and pass it to the input handler and renderer.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    rng: SmallRng,
    first_click_policy: FirstClickPolicy,
    first_click_taken: bool,
    flagged_count: CellCount,
    status: GameStatus,
    triggered_mine: Option<Coord2>,
}

impl GameSession {
    /// Generates a fresh board with [`RejectionSamplingGenerator`].
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, &RejectionSamplingGenerator, seed)
    }

    pub fn with_generator(
        config: GameConfig,
        generator: &impl MinefieldGenerator,
        seed: u64,
    ) -> Result<Self> {
        config.validate()?;
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = generator.generate(config, &mut rng)?;
        log::debug!(
            "new game: {}x{} with {} mines, seed {}",
            config.size.0,
            config.size.1,
            config.mines,
            seed
        );
        Ok(Self::from_parts(board, rng))
    }

    /// Starts a session on a prepared board, `seed` only drives first-click relocation.
    pub fn from_board(board: Board, seed: u64) -> Self {
        Self::from_parts(board, SmallRng::seed_from_u64(seed))
    }

    fn from_parts(board: Board, rng: SmallRng) -> Self {
        Self {
            board,
            rng,
            first_click_policy: FirstClickPolicy::default(),
            first_click_taken: false,
            flagged_count: 0,
            status: GameStatus::default(),
            triggered_mine: None,
        }
    }

    pub fn with_first_click_policy(mut self, policy: FirstClickPolicy) -> Self {
        self.first_click_policy = policy;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    pub fn first_click_taken(&self) -> bool {
        self.first_click_taken
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell_at(&self, coords: Coord2) -> CellState {
        self.board[coords].state()
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        let cell = self.board.cell_mut(coords);
        Ok(match cell.state() {
            CellState::Hidden => {
                cell.is_flagged = true;
                self.flagged_count += 1;
                MarkOutcome::Changed
            }
            CellState::Flagged => {
                cell.is_flagged = false;
                self.flagged_count -= 1;
                MarkOutcome::Changed
            }
            CellState::Revealed => MarkOutcome::NoChange,
        })
    }

    /// Reveals a hidden cell; flagged and revealed cells are left alone.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        if self.cell_at(coords) != CellState::Hidden {
            return Ok(RevealOutcome::NoChange);
        }

        if !self.first_click_taken {
            self.first_click_taken = true;
            if self.board[coords].has_mine()
                && self.first_click_policy == FirstClickPolicy::Relocate
            {
                let to = relocate_mine(&mut self.board, coords, &mut self.rng);
                log::debug!("first click on a mine at {:?}, moved it to {:?}", coords, to);
            }
        }

        if self.board[coords].has_mine() {
            log::debug!("mine hit at {:?}", coords);
            self.board.cell_mut(coords).is_revealed = true;
            self.triggered_mine = Some(coords);
            self.end_game(GameStatus::Lost);
            return Ok(RevealOutcome::HitMine);
        }

        self.cascade(coords);

        if self.board.safe_cells_left() == 0 {
            self.end_game(GameStatus::Won);
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    /// Breadth-first reveal starting at a safe cell, each cell is queued at most once.
    fn cascade(&mut self, start: Coord2) {
        let mut queued = BTreeSet::from([start]);
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            let cell = self.board.cell_mut(coords);
            cell.is_revealed = true;
            if cell.is_flagged {
                cell.is_flagged = false;
                self.flagged_count -= 1;
            }
            if cell.adjacent_mine_count != 0 {
                continue;
            }

            for pos in self.board.neighbors(coords) {
                if !self.board[pos].is_revealed() && queued.insert(pos) {
                    to_visit.push_back(pos);
                }
            }
        }
        log::trace!("revealed {} cells from {:?}", queued.len(), start);
    }

    fn end_game(&mut self, status: GameStatus) {
        if self.status.is_finished() {
            return;
        }
        log::debug!("game over: {:?}", status);
        self.status = status;
        self.board.reveal_all();
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
