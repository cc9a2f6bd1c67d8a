use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Deserializer, Serialize};

use crate::*;

/// Mutable per-cell value store over a [`Grid`], every cell starts empty.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board<V> {
    grid: Grid,
    values: Array2<Option<V>>,
}

impl<V> Board<V> {
    pub fn new(width: Coord) -> Result<Self> {
        let grid = Grid::new(width)?;
        let size = usize::from(width);
        Ok(Self {
            grid,
            values: Array2::from_shape_simple_fn((size, size), || None),
        })
    }

    /// Pairs `values` with `grid`, their shapes must agree.
    pub fn from_parts(grid: Grid, values: Array2<Option<V>>) -> Result<Self> {
        let size = usize::from(grid.width());
        if values.dim() != (size, size) {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { grid, values })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> Coord {
        self.grid.width()
    }

    pub fn get(&self, cell: Cell) -> Result<Option<&V>> {
        let cell = self.validate_cell(cell)?;
        Ok(self.values[cell.to_nd_index()].as_ref())
    }

    /// Overwrites the value of `cell`, returning what was there before.
    pub fn set(&mut self, cell: Cell, value: Option<V>) -> Result<Option<V>> {
        let cell = self.validate_cell(cell)?;
        Ok(core::mem::replace(&mut self.values[cell.to_nd_index()], value))
    }

    pub fn filter(&self, predicate: impl Fn(Option<&V>) -> bool) -> Vec<Cell> {
        self.entries()
            .filter(|(_, value)| predicate(*value))
            .map(|(cell, _)| cell)
            .collect()
    }

    pub fn find(&self, predicate: impl Fn(Option<&V>) -> bool) -> Option<Cell> {
        self.entries()
            .find(|(_, value)| predicate(*value))
            .map(|(cell, _)| cell)
    }

    pub fn any(&self, predicate: impl Fn(Option<&V>) -> bool) -> bool {
        self.entries().any(|(_, value)| predicate(value))
    }

    pub fn all(&self, predicate: impl Fn(Option<&V>) -> bool) -> bool {
        self.entries().all(|(_, value)| predicate(value))
    }

    pub fn count(&self, predicate: impl Fn(Option<&V>) -> bool) -> usize {
        self.entries().filter(|(_, value)| predicate(*value)).count()
    }

    /// Values in row-major order.
    pub fn values(&self) -> impl Iterator<Item = Option<&V>> {
        self.values.iter().map(Option::as_ref)
    }

    /// Clears every cell.
    pub fn clear(&mut self) {
        self.values.map_inplace(|value| *value = None);
    }

    pub fn validate_cell(&self, cell: Cell) -> Result<Cell> {
        if self.grid.contains(cell) {
            Ok(cell)
        } else {
            Err(GameError::ForeignCell {
                cell,
                width: self.grid.width(),
            })
        }
    }

    fn entries(&self) -> impl Iterator<Item = (Cell, Option<&V>)> {
        self.grid
            .cells()
            .iter()
            .map(|&cell| (cell, self.values[cell.to_nd_index()].as_ref()))
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Board<V> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename = "Board")]
        struct Shape<V> {
            grid: Grid,
            values: Array2<Option<V>>,
        }

        let Shape { grid, values } = Shape::deserialize(deserializer)?;
        Board::from_parts(grid, values).map_err(serde::de::Error::custom)
    }
}

impl<V> Index<Cell> for Board<V> {
    type Output = Option<V>;

    fn index(&self, cell: Cell) -> &Self::Output {
        &self.values[cell.to_nd_index()]
    }
}

impl<V> IndexMut<Cell> for Board<V> {
    fn index_mut(&mut self, cell: Cell) -> &mut Self::Output {
        &mut self.values[cell.to_nd_index()]
    }
}
