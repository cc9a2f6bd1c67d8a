use serde::{Deserialize, Serialize};

use crate::*;

/// Fixed set of cells of a square grid plus its row/column geometry.
///
/// Serialized as its width alone, the cells are rebuilt on load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Coord", into = "Coord")]
pub struct Grid {
    width: Coord,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: Coord) -> Result<Self> {
        if width == 0 {
            return Err(GameError::InvalidWidth);
        }
        let cells = (1..=width)
            .flat_map(|row| (1..=width).map(move |col| Cell::new(row, col)))
            .collect();
        Ok(Self { width, cells })
    }

    pub fn width(&self) -> Coord {
        self.width
    }

    pub fn cell_count(&self) -> CellCount {
        mult(self.width, self.width)
    }

    /// Every cell, in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.in_bounds(cell.row, cell.col)
    }

    pub fn cell_or_none(&self, row: Coord, col: Coord) -> Option<Cell> {
        if self.in_bounds(row, col) {
            let index = usize::from(row - 1) * usize::from(self.width) + usize::from(col - 1);
            Some(self.cells[index])
        } else {
            None
        }
    }

    pub fn cell(&self, row: Coord, col: Coord) -> Result<Cell> {
        self.cell_or_none(row, col).ok_or(GameError::OutOfBounds {
            row,
            col,
            width: self.width,
        })
    }

    /// Cells `(row, j)` for `j` over `cols`, clamped to the grid.
    pub fn row(&self, row: Coord, cols: impl Into<Span>) -> Result<Vec<Cell>> {
        cols.into()
            .clamp(self.width)
            .into_iter()
            .map(|col| self.cell(row, col))
            .collect()
    }

    /// Cells `(i, col)` for `i` over `rows`, clamped to the grid.
    pub fn column(&self, rows: impl Into<Span>, col: Coord) -> Result<Vec<Cell>> {
        rows.into()
            .clamp(self.width)
            .into_iter()
            .map(|row| self.cell(row, col))
            .collect()
    }

    pub fn neighbour(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let (d_row, d_col) = direction.delta();
        let row = cell.row.checked_add_signed(d_row)?;
        let col = cell.col.checked_add_signed(d_col)?;
        self.cell_or_none(row, col)
    }

    fn in_bounds(&self, row: Coord, col: Coord) -> bool {
        (1..=self.width).contains(&row) && (1..=self.width).contains(&col)
    }
}

impl TryFrom<Coord> for Grid {
    type Error = GameError;

    fn try_from(width: Coord) -> Result<Self> {
        Self::new(width)
    }
}

impl From<Grid> for Coord {
    fn from(grid: Grid) -> Self {
        grid.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_owns_width_squared_cells() {
        for width in 1..=6 {
            let grid = Grid::new(width).unwrap();
            assert_eq!(grid.cells().len(), usize::from(width) * usize::from(width));
            assert_eq!(grid.cell_count(), mult(width, width));
        }
    }

    #[test]
    fn zero_width_is_rejected() {
        assert_eq!(Grid::new(0), Err(GameError::InvalidWidth));
    }

    #[test]
    fn grid_serializes_as_width() {
        let grid = Grid::new(3).unwrap();
        assert_eq!(serde_json::to_string(&grid).unwrap(), "3");
        assert_eq!(serde_json::from_str::<Grid>("3").unwrap(), grid);
        assert!(serde_json::from_str::<Grid>("0").is_err());
    }

    #[test]
    fn cell_or_none_only_inside_bounds() {
        let grid = Grid::new(3).unwrap();
        for row in 0..=4 {
            for col in 0..=4 {
                let inside = (1..=3).contains(&row) && (1..=3).contains(&col);
                assert_eq!(grid.cell_or_none(row, col).is_some(), inside, "({row}, {col})");
            }
        }
    }

    #[test]
    fn cell_reports_out_of_bounds() {
        let grid = Grid::new(4).unwrap();
        assert_eq!(grid.cell(2, 3), Ok(Cell::new(2, 3)));
        assert_eq!(
            grid.cell(5, 1),
            Err(GameError::OutOfBounds {
                row: 5,
                col: 1,
                width: 4
            })
        );
    }

    #[test]
    fn rows_and_columns_follow_traversal_order() {
        let grid = Grid::new(2).unwrap();

        assert_eq!(
            grid.row(1, 1..=2).unwrap(),
            vec![Cell::new(1, 1), Cell::new(1, 2)]
        );
        assert_eq!(
            grid.row(2, (1..=2).rev()).unwrap(),
            vec![Cell::new(2, 2), Cell::new(2, 1)]
        );
        assert_eq!(
            grid.column(1..=2, 1).unwrap(),
            vec![Cell::new(1, 1), Cell::new(2, 1)]
        );
        assert_eq!(
            grid.column((1..=2).rev(), 2).unwrap(),
            vec![Cell::new(2, 2), Cell::new(1, 2)]
        );
    }

    #[test]
    fn overrunning_ranges_are_clamped() {
        let grid = Grid::new(2).unwrap();

        assert_eq!(
            grid.row(1, 1..=10).unwrap(),
            vec![Cell::new(1, 1), Cell::new(1, 2)]
        );
        assert_eq!(
            grid.column((1..=10).rev(), 1).unwrap(),
            vec![Cell::new(2, 1), Cell::new(1, 1)]
        );
        assert!(grid.row(2, 3..=4).unwrap().is_empty());
    }

    #[test]
    fn row_outside_grid_fails() {
        let grid = Grid::new(2).unwrap();
        assert!(matches!(
            grid.row(3, 1..=2),
            Err(GameError::OutOfBounds { row: 3, .. })
        ));
    }

    #[test]
    fn neighbours_stop_at_edges() {
        let grid = Grid::new(2).unwrap();
        let corner = Cell::new(1, 1);

        assert_eq!(grid.neighbour(corner, Direction::Up), None);
        assert_eq!(grid.neighbour(corner, Direction::Left), None);
        assert_eq!(grid.neighbour(corner, Direction::Down), Some(Cell::new(2, 1)));
        assert_eq!(grid.neighbour(corner, Direction::Right), Some(Cell::new(1, 2)));
    }

    #[test]
    fn neighbour_is_antisymmetric() {
        let grid = Grid::new(4).unwrap();
        for &cell in grid.cells() {
            for direction in Direction::ALL {
                if let Some(next) = grid.neighbour(cell, direction) {
                    assert_eq!(grid.neighbour(next, direction.reversed()), Some(cell));
                }
            }
        }
    }
}
