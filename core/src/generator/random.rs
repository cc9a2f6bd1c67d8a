use rand::prelude::*;
use rand::rngs::StdRng;

use super::*;

fn seeded_rng(seed: Option<u64>) -> StdRng {
    StdRng::seed_from_u64(seed.unwrap_or_else(rand::random))
}

/// Places a 2 (or, less often, a 4) on a uniformly chosen empty cell.
#[derive(Debug)]
pub struct RandomTileSpawner {
    rng: StdRng,
    four_probability: f64,
}

impl RandomTileSpawner {
    pub fn new(seed: u64) -> Self {
        Self::from_config(&GameConfig::default().with_seed(seed))
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            rng: seeded_rng(config.seed),
            four_probability: config.four_probability.clamp(0.0, 1.0),
        }
    }
}

impl Default for RandomTileSpawner {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl TileSpawner for RandomTileSpawner {
    fn next_value(&mut self, board: &Board<Tile>) -> Option<(Cell, Tile)> {
        let empty = board.filter(|value| value.is_none());
        if empty.is_empty() {
            return None;
        }
        let cell = empty[self.rng.random_range(0..empty.len())];
        let value = if self.rng.random_bool(self.four_probability) {
            4
        } else {
            2
        };
        Some((cell, value))
    }
}

/// Shuffles `1..=len` and fixes the parity so the puzzle can always be solved.
#[derive(Debug)]
pub struct RandomPermutationSource {
    rng: StdRng,
}

impl RandomPermutationSource {
    pub fn new(seed: u64) -> Self {
        Self::from_config(&GameConfig::default().with_seed(seed))
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            rng: seeded_rng(config.seed),
        }
    }
}

impl Default for RandomPermutationSource {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl PermutationSource for RandomPermutationSource {
    fn initial_permutation(&mut self, len: usize) -> Vec<Tile> {
        let Ok(max) = Tile::try_from(len) else {
            log::warn!("Permutation of {} tiles is too large", len);
            return Vec::new();
        };
        let mut permutation: Vec<Tile> = (1..=max).collect();
        permutation.shuffle(&mut self.rng);

        if !is_solvable(&permutation) && permutation.len() >= 2 {
            log::debug!("Swapping first two tiles to fix permutation parity");
            permutation.swap(0, 1);
        }
        permutation
    }
}
