use smallvec::SmallVec;

use crate::*;

/// Collapsed line, one entry per surviving tile.
pub type Collapsed<T> = SmallVec<[T; 4]>;

/// Slides the values of `line` towards its front, merging equal neighbours.
///
/// `line` must already be ordered with the destination end first. Empty slots
/// are skipped and do not separate equal values. A value produced by `merge`
/// cannot merge again in the same pass, so `[2, 2, 2, _]` becomes `[4, 2]`.
pub fn collapse_line<T, F>(line: &[Option<T>], merge: F) -> Collapsed<T>
where
    T: PartialEq + Copy,
    F: Fn(T) -> T,
{
    let mut collapsed = Collapsed::new();
    let mut last_merged = false;

    for value in line.iter().flatten().copied() {
        match collapsed.last_mut() {
            Some(last) if !last_merged && *last == value => {
                *last = merge(value);
                last_merged = true;
            }
            _ => {
                collapsed.push(value);
                last_merged = false;
            }
        }
    }

    collapsed
}

/// Collapses the values found at `cells` and writes them back front-aligned,
/// clearing the remainder. Returns whether any cell changed.
pub fn collapse_into<T, F>(board: &mut Board<T>, cells: &[Cell], merge: F) -> Result<bool>
where
    T: PartialEq + Copy + core::fmt::Debug,
    F: Fn(T) -> T,
{
    let before = cells
        .iter()
        .map(|&cell| board.get(cell).map(|value| value.copied()))
        .collect::<Result<SmallVec<[Option<T>; 4]>>>()?;
    let collapsed = collapse_line(&before, merge);

    let mut changed = false;
    for (index, (&cell, old)) in cells.iter().zip(before.iter().copied()).enumerate() {
        let new = collapsed.get(index).copied();
        if new != old {
            board.set(cell, new)?;
            changed = true;
        }
    }

    log::trace!("Collapsed {:?} into {:?}, changed: {}", before, collapsed, changed);
    Ok(changed)
}
