use serde::{Deserialize, Serialize};

pub use board::*;
pub use collapse::*;
pub use error::*;
pub use fifteen::*;
pub use game2048::*;
pub use generator::*;
pub use grid::*;
pub use types::*;

mod board;
mod collapse;
mod error;
mod fifteen;
mod game2048;
mod generator;
mod grid;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: Coord,
    /// Tile value that wins a game of 2048.
    pub target_tile: Tile,
    /// Chance that a spawned 2048 tile is a 4 instead of a 2.
    pub four_probability: f64,
    /// Seed for the random initializers, fresh entropy when absent.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub const DEFAULT_WIDTH: Coord = 4;
    pub const DEFAULT_TARGET_TILE: Tile = 2048;
    pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.1;

    pub const fn new_unchecked(width: Coord, target_tile: Tile, four_probability: f64) -> Self {
        Self {
            width,
            target_tile,
            four_probability,
            seed: None,
        }
    }

    pub fn new(width: Coord, target_tile: Tile, four_probability: f64) -> Self {
        let clamped_width = width.max(1);
        let clamped_probability = if four_probability.is_nan() {
            Self::DEFAULT_FOUR_PROBABILITY
        } else {
            four_probability.clamp(0.0, 1.0)
        };
        let clamped_target = target_tile.max(4);
        if (clamped_width, clamped_target) != (width, target_tile)
            || clamped_probability.to_bits() != four_probability.to_bits()
        {
            log::warn!(
                "Clamped game config, requested width {} target {} probability {}",
                width,
                target_tile,
                four_probability
            );
        }
        Self::new_unchecked(clamped_width, clamped_target, clamped_probability)
    }

    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parses a JSON document, missing fields take their default value.
    pub fn from_json(json: &str) -> Result<Self> {
        let parsed: Self =
            serde_json::from_str(json).map_err(|err| GameError::InvalidConfig(err.to_string()))?;
        if parsed.width == 0 {
            return Err(GameError::InvalidWidth);
        }
        if !(0.0..=1.0).contains(&parsed.four_probability) {
            return Err(GameError::InvalidConfig(format!(
                "four_probability {} is not within 0..=1",
                parsed.four_probability
            )));
        }
        Ok(parsed)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.width)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(
            Self::DEFAULT_WIDTH,
            Self::DEFAULT_TARGET_TILE,
            Self::DEFAULT_FOUR_PROBABILITY,
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    NoChange,
    Moved,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Moved => true,
        }
    }
}

impl From<bool> for MoveOutcome {
    fn from(moved: bool) -> Self {
        if moved { Self::Moved } else { Self::NoChange }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Stuck,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Stuck)
    }
}

/// Surface shared by the tile games, driven by an external input loop.
pub trait Game {
    fn initialize(&mut self) -> Result<()>;

    fn can_move(&self) -> bool;

    fn has_won(&self) -> bool;

    fn process_move(&mut self, direction: Direction) -> Result<MoveOutcome>;

    fn get(&self, row: Coord, col: Coord) -> Result<Option<Tile>>;

    fn width(&self) -> Coord;

    fn status(&self) -> GameStatus {
        if self.has_won() {
            GameStatus::Won
        } else if self.can_move() {
            GameStatus::Playing
        } else {
            GameStatus::Stuck
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_new_clamps_out_of_range_values() {
        let config = GameConfig::new(0, 1, 3.5);
        assert_eq!(config.width, 1);
        assert_eq!(config.target_tile, 4);
        assert_eq!(config.four_probability, 1.0);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn config_from_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{ "target_tile": 512, "seed": 7 }"#).unwrap();
        assert_eq!(
            config,
            GameConfig::new_unchecked(4, 512, GameConfig::DEFAULT_FOUR_PROBABILITY).with_seed(7)
        );
        assert_eq!(config.total_cells(), 16);
    }

    #[test]
    fn config_from_json_rejects_bad_documents() {
        assert!(matches!(
            GameConfig::from_json("{ width: }"),
            Err(GameError::InvalidConfig(_))
        ));
        assert_eq!(
            GameConfig::from_json(r#"{ "width": 0 }"#),
            Err(GameError::InvalidWidth)
        );
        assert!(matches!(
            GameConfig::from_json(r#"{ "four_probability": -0.5 }"#),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn move_outcome_reports_updates() {
        assert!(MoveOutcome::from(true).has_update());
        assert!(!MoveOutcome::from(false).has_update());
    }
}
