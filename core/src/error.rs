use thiserror::Error;

use crate::{Cell, Coord};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinate [{row},{col}] out of bounds for a board of width {width}")]
    OutOfBounds { row: Coord, col: Coord, width: Coord },
    #[error("{cell} is out of range for a board of width {width}")]
    ForeignCell { cell: Cell, width: Coord },
    #[error("Board width must be at least 1")]
    InvalidWidth,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Initial arrangement is not a permutation of 1..={expected_max}")]
    InvalidPermutation { expected_max: usize },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
