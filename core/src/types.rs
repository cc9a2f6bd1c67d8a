use core::fmt;
use core::iter::Rev;
use core::ops::RangeInclusive;
use serde::{Deserialize, Serialize};

/// Single 1-based coordinate axis, also used for the board width.
pub type Coord = u8;

/// Count type used for total-cell counts.
pub type CellCount = u16;

/// Value stored on the tiles of both games.
pub type Tile = u32;

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Immutable 1-based `(row, col)` address on a square grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: Coord,
    pub col: Coord,
}

impl Cell {
    pub const fn new(row: Coord, col: Coord) -> Self {
        Self { row, col }
    }

    /// Zero-based `[row, col]` index into a backing array.
    pub(crate) fn to_nd_index(self) -> [usize; 2] {
        [usize::from(self.row) - 1, usize::from(self.col) - 1]
    }

    pub fn manhattan_distance(self, other: Cell) -> u16 {
        u16::from(self.row.abs_diff(other.row)) + u16::from(self.col.abs_diff(other.col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({}, {})", self.row, self.col)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub const fn reversed(self) -> Self {
        use Direction::*;
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    /// Row and column offsets of a single step.
    pub const fn delta(self) -> (i8, i8) {
        use Direction::*;
        match self {
            Up => (-1, 0),
            Down => (1, 0),
            Left => (0, -1),
            Right => (0, 1),
        }
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Inclusive coordinate progression that may run in either direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Span {
    Empty,
    Ascending(Coord, Coord),
    Descending(Coord, Coord),
}

impl Span {
    /// `first..=last`, empty when `first > last`.
    pub const fn ascending(first: Coord, last: Coord) -> Self {
        if first <= last {
            Self::Ascending(first, last)
        } else {
            Self::Empty
        }
    }

    /// `first` down to `last`, empty when `first < last`.
    pub const fn descending(first: Coord, last: Coord) -> Self {
        if first >= last {
            Self::Descending(first, last)
        } else {
            Self::Empty
        }
    }

    /// Restricts the span to `1..=width` keeping its traversal direction.
    pub fn clamp(self, width: Coord) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Ascending(first, last) => Self::ascending(first.max(1), last.min(width)),
            Self::Descending(first, last) => Self::descending(first.min(width), last.max(1)),
        }
    }

    pub fn len(self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Ascending(first, last) => usize::from(last - first) + 1,
            Self::Descending(first, last) => usize::from(first - last) + 1,
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl IntoIterator for Span {
    type Item = Coord;
    type IntoIter = SpanIter;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Self::Empty => SpanIter::Empty,
            Self::Ascending(first, last) => SpanIter::Ascending(first..=last),
            Self::Descending(first, last) => SpanIter::Descending((last..=first).rev()),
        }
    }
}

/// Coordinates of a [`Span`] in traversal order.
#[derive(Clone, Debug)]
pub enum SpanIter {
    Empty,
    Ascending(RangeInclusive<Coord>),
    Descending(Rev<RangeInclusive<Coord>>),
}

impl Iterator for SpanIter {
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Empty => None,
            Self::Ascending(range) => range.next(),
            Self::Descending(range) => range.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Empty => (0, Some(0)),
            Self::Ascending(range) => range.size_hint(),
            Self::Descending(range) => range.size_hint(),
        }
    }
}

impl ExactSizeIterator for SpanIter {}

impl From<RangeInclusive<Coord>> for Span {
    fn from(range: RangeInclusive<Coord>) -> Self {
        let (first, last) = range.into_inner();
        Self::ascending(first, last)
    }
}

impl From<Rev<RangeInclusive<Coord>>> for Span {
    fn from(mut range: Rev<RangeInclusive<Coord>>) -> Self {
        match (range.next(), range.next_back()) {
            (Some(first), Some(last)) => Self::descending(first, last),
            (Some(only), None) => Self::Descending(only, only),
            _ => Self::Empty,
        }
    }
}
