use serde::{Deserialize, Serialize};

use crate::*;

/// Rule engine for 2048 on a square board.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game2048<S> {
    board: Board<Tile>,
    target_tile: Tile,
    won: bool,
    #[serde(skip)]
    spawner: S,
}

impl Game2048<RandomTileSpawner> {
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        Self::with_config(config, RandomTileSpawner::from_config(config))
    }
}

impl<S: TileSpawner> Game2048<S> {
    pub fn new(spawner: S) -> Result<Self> {
        Self::with_config(&GameConfig::default(), spawner)
    }

    pub fn with_config(config: &GameConfig, spawner: S) -> Result<Self> {
        Ok(Self {
            board: Board::new(config.width)?,
            target_tile: config.target_tile,
            won: false,
            spawner,
        })
    }

    pub fn board(&self) -> &Board<Tile> {
        &self.board
    }

    /// Asks the spawner for a tile and places it, returns where it went.
    pub fn add_new_value(&mut self) -> Result<Option<Cell>> {
        let Some((cell, value)) = self.spawner.next_value(&self.board) else {
            log::debug!("No room left to spawn a tile");
            return Ok(None);
        };
        self.board.set(cell, Some(value))?;
        log::debug!("Spawned {} at {}", value, cell);
        self.update_won();
        Ok(Some(cell))
    }

    /// Collapses every row or column towards `direction`, returns whether anything moved.
    pub fn move_values(&mut self, direction: Direction) -> Result<bool> {
        let width = self.board.width();
        let mut moved = false;
        for index in 1..=width {
            let line = self.line(index, direction)?;
            moved |= collapse_into(&mut self.board, &line, |value| value.saturating_mul(2))?;
        }
        Ok(moved)
    }

    /// The cells of the `index`-th row or column, destination end first.
    fn line(&self, index: Coord, direction: Direction) -> Result<Vec<Cell>> {
        use Direction::*;

        let grid = self.board.grid();
        let width = grid.width();
        match direction {
            Up => grid.column(1..=width, index),
            Down => grid.column((1..=width).rev(), index),
            Left => grid.row(index, 1..=width),
            Right => grid.row(index, (1..=width).rev()),
        }
    }

    fn update_won(&mut self) {
        if !self.won && self.board.any(|value| value == Some(&self.target_tile)) {
            log::debug!("Reached the {} tile", self.target_tile);
            self.won = true;
        }
    }
}

impl<S: TileSpawner> Game for Game2048<S> {
    fn initialize(&mut self) -> Result<()> {
        self.board.clear();
        self.won = false;
        for _ in 0..2 {
            self.add_new_value()?;
        }
        Ok(())
    }

    /// Only looks for an empty cell: a full board with mergeable neighbours
    /// still reports `false`.
    fn can_move(&self) -> bool {
        self.board.any(|value| value.is_none())
    }

    fn has_won(&self) -> bool {
        self.won
    }

    fn process_move(&mut self, direction: Direction) -> Result<MoveOutcome> {
        let moved = self.move_values(direction)?;
        log::debug!("Move {:?}, moved: {}", direction, moved);
        if moved {
            self.update_won();
            self.add_new_value()?;
        }
        Ok(moved.into())
    }

    fn get(&self, row: Coord, col: Coord) -> Result<Option<Tile>> {
        let cell = self.board.grid().cell(row, col)?;
        Ok(self.board[cell])
    }

    fn width(&self) -> Coord {
        self.board.width()
    }
}
