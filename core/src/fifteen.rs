use serde::{Deserialize, Serialize};

use crate::*;

/// Rule engine for the game of fifteen: numbered tiles plus one blank.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameOfFifteen<P> {
    board: Board<Tile>,
    #[serde(skip)]
    source: P,
}

impl GameOfFifteen<RandomPermutationSource> {
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        Self::with_config(config, RandomPermutationSource::from_config(config))
    }
}

impl<P: PermutationSource> GameOfFifteen<P> {
    pub fn new(source: P) -> Result<Self> {
        Self::with_config(&GameConfig::default(), source)
    }

    pub fn with_config(config: &GameConfig, source: P) -> Result<Self> {
        Ok(Self {
            board: Board::new(config.width)?,
            source,
        })
    }

    pub fn board(&self) -> &Board<Tile> {
        &self.board
    }

    /// Number of numbered tiles, one less than the cell count.
    pub fn tile_count(&self) -> usize {
        self.board.grid().cells().len() - 1
    }

    pub fn empty_cell(&self) -> Option<Cell> {
        self.board.find(|value| value.is_none())
    }

    /// Lays the permutation out row-major, leaving the last cell blank.
    fn add_values(&mut self, permutation: &[Tile]) -> Result<()> {
        let cells = self.board.grid().cells().to_vec();
        for (&cell, &value) in cells.iter().zip(permutation) {
            self.board.set(cell, Some(value))?;
        }
        if let Some(&last) = cells.last() {
            self.board.set(last, None)?;
        }
        Ok(())
    }
}

impl<P: PermutationSource> Game for GameOfFifteen<P> {
    fn initialize(&mut self) -> Result<()> {
        let len = self.tile_count();
        let permutation = self.source.initial_permutation(len);
        validate_permutation(&permutation, len)?;
        if !is_solvable(&permutation) {
            log::warn!("Starting arrangement {:?} cannot be solved", permutation);
        }
        self.add_values(&permutation)?;
        log::debug!("Initialized game of fifteen with {:?}", permutation);
        Ok(())
    }

    fn can_move(&self) -> bool {
        true
    }

    fn has_won(&self) -> bool {
        self.board
            .values()
            .zip(1..)
            .all(|(value, rank)| value.is_none_or(|&value| value == rank))
    }

    /// Slides the tile that sits against `direction` from the blank into it,
    /// so the tile travels in `direction` and the blank the other way.
    fn process_move(&mut self, direction: Direction) -> Result<MoveOutcome> {
        let Some(empty) = self.empty_cell() else {
            return Ok(MoveOutcome::NoChange);
        };
        let Some(neighbour) = self.board.grid().neighbour(empty, direction.reversed()) else {
            log::debug!("Move {:?} blocked at {}", direction, empty);
            return Ok(MoveOutcome::NoChange);
        };

        let Some(tile) = self.board.set(neighbour, None)? else {
            log::debug!("Move {:?} found no tile at {}", direction, neighbour);
            return Ok(MoveOutcome::NoChange);
        };
        self.board.set(empty, Some(tile))?;
        log::debug!("Moved {} from {} to {}", tile, neighbour, empty);
        Ok(MoveOutcome::Moved)
    }

    fn get(&self, row: Coord, col: Coord) -> Result<Option<Tile>> {
        let cell = self.board.grid().cell(row, col)?;
        Ok(self.board[cell])
    }

    fn width(&self) -> Coord {
        self.board.width()
    }
}
