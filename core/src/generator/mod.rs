use crate::*;
pub use random::*;

mod random;

/// Supplies the tile a game of 2048 adds after a move.
pub trait TileSpawner {
    /// Picks an empty cell of `board` and the value to place there, `None` when the board is full.
    fn next_value(&mut self, board: &Board<Tile>) -> Option<(Cell, Tile)>;
}

/// Supplies the starting arrangement of a game of fifteen.
pub trait PermutationSource {
    /// A permutation of `1..=len` laid out in row-major order, the blank follows it.
    fn initial_permutation(&mut self, len: usize) -> Vec<Tile>;
}

/// Always hands out the same arrangement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedPermutation(pub Vec<Tile>);

impl FixedPermutation {
    /// The solved arrangement for a board of `width`.
    pub fn solved(width: Coord) -> Self {
        let len = Tile::from(mult(width, width)).saturating_sub(1);
        Self((1..=len).collect())
    }
}

impl PermutationSource for FixedPermutation {
    fn initial_permutation(&mut self, len: usize) -> Vec<Tile> {
        if self.0.len() != len {
            log::warn!(
                "Fixed permutation has {} entries but the board needs {}",
                self.0.len(),
                len
            );
        }
        self.0.clone()
    }
}

/// `true` when the permutation has an even number of inversions.
pub fn is_even(permutation: &[Tile]) -> bool {
    let inversions = permutation
        .iter()
        .enumerate()
        .flat_map(|(a, &left)| permutation[a + 1..].iter().filter(move |&&right| left > right))
        .count();
    inversions % 2 == 0
}

/// Whether the solved state is reachable when the blank starts in the last cell.
pub fn is_solvable(permutation: &[Tile]) -> bool {
    is_even(permutation)
}

/// Checks that `permutation` holds each of `1..=len` exactly once.
pub fn validate_permutation(permutation: &[Tile], len: usize) -> Result<()> {
    let mut seen = vec![false; len];
    let invalid = GameError::InvalidPermutation { expected_max: len };
    if permutation.len() != len {
        return Err(invalid);
    }
    for &value in permutation {
        let index = usize::try_from(value)
            .ok()
            .and_then(|value| value.checked_sub(1))
            .filter(|&index| index < len)
            .ok_or_else(|| invalid.clone())?;
        if core::mem::replace(&mut seen[index], true) {
            return Err(invalid);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity_counts_inversions() {
        assert!(is_even(&[1, 2, 3]));
        assert!(!is_even(&[3, 2, 1]));
        assert!(!is_even(&[2, 1, 3]));
        assert!(is_even(&[2, 3, 1]));
        assert!(is_even(&[]));
    }

    #[test]
    fn swapping_last_two_tiles_is_unsolvable() {
        let mut permutation: Vec<Tile> = (1..=15).collect();
        assert!(is_solvable(&permutation));
        permutation.swap(13, 14);
        assert!(!is_solvable(&permutation));
    }

    #[test]
    fn validate_permutation_requires_each_value_once() {
        assert_eq!(validate_permutation(&[2, 3, 1], 3), Ok(()));

        let invalid = Err(GameError::InvalidPermutation { expected_max: 3 });
        assert_eq!(validate_permutation(&[1, 2], 3), invalid);
        assert_eq!(validate_permutation(&[1, 1, 3], 3), invalid);
        assert_eq!(validate_permutation(&[0, 1, 2], 3), invalid);
        assert_eq!(validate_permutation(&[1, 2, 4], 3), invalid);
    }

    #[test]
    fn solved_fixed_permutation_is_sorted() {
        assert_eq!(FixedPermutation::solved(2).0, vec![1, 2, 3]);
        assert_eq!(FixedPermutation::solved(1).0, Vec::<Tile>::new());
    }
}
