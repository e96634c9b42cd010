use std::ops::{Index, IndexMut};

use serde::Serialize;

pub const ROWS: usize = 4;
pub const COLS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GridCoord {
    pub row: usize,
    pub col: usize,
}

impl GridCoord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(self) -> bool {
        self.row < ROWS && self.col < COLS
    }

    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        let target = Self::new(row, col);
        target.in_bounds().then_some(target)
    }

    pub fn orthogonal_neighbors(self) -> impl Iterator<Item = Self> {
        [(1, 0), (-1, 0), (0, 1), (0, -1)]
            .into_iter()
            .filter_map(move |(d_row, d_col)| self.offset(d_row, d_col))
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..ROWS).flat_map(|row| (0..COLS).map(move |col| Self::new(row, col)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CellGrid<T> {
    cells: [[T; COLS]; ROWS],
}

impl<T: Copy> CellGrid<T> {
    pub fn filled(value: T) -> Self {
        Self {
            cells: [[value; COLS]; ROWS],
        }
    }
}

impl<T> CellGrid<T> {
    pub const fn from_rows(cells: [[T; COLS]; ROWS]) -> Self {
        Self { cells }
    }

    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, &T)> {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, value)| (GridCoord::new(row, col), value))
        })
    }

    pub fn map<U>(&self, mut f: impl FnMut(GridCoord, &T) -> U) -> CellGrid<U> {
        CellGrid {
            cells: std::array::from_fn(|row| {
                std::array::from_fn(|col| f(GridCoord::new(row, col), &self.cells[row][col]))
            }),
        }
    }
}

impl<T> Index<GridCoord> for CellGrid<T> {
    type Output = T;

    fn index(&self, coord: GridCoord) -> &T {
        &self.cells[coord.row][coord.col]
    }
}

impl<T> IndexMut<GridCoord> for CellGrid<T> {
    fn index_mut(&mut self, coord: GridCoord) -> &mut T {
        &mut self.cells[coord.row][coord.col]
    }
}

#[cfg(test)]
mod tests {
    use super::{CellGrid, GridCoord};

    #[test]
    fn offset_stays_inside_grid() {
        let corner = GridCoord::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 0), Some(GridCoord::new(1, 0)));

        let far = GridCoord::new(3, 3);
        assert_eq!(far.offset(1, 0), None);
        assert_eq!(far.offset(0, 1), None);
    }

    #[test]
    fn neighbors_are_orthogonal_and_clipped() {
        let mut corner: Vec<_> = GridCoord::new(0, 0).orthogonal_neighbors().collect();
        corner.sort();
        assert_eq!(corner, vec![GridCoord::new(0, 1), GridCoord::new(1, 0)]);

        assert_eq!(GridCoord::new(1, 2).orthogonal_neighbors().count(), 4);
        assert!(
            GridCoord::new(1, 2)
                .orthogonal_neighbors()
                .all(|n| n.row == 1 || n.col == 2)
        );
    }

    #[test]
    fn index_writes_a_single_cell() {
        let mut grid = CellGrid::filled(0u8);
        grid[GridCoord::new(2, 1)] = 7;

        assert_eq!(grid[GridCoord::new(2, 1)], 7);
        assert_eq!(grid.iter().filter(|(_, value)| **value != 0).count(), 1);
    }

    #[test]
    fn iteration_is_row_major() {
        let grid = CellGrid::from_rows([
            [0, 1, 2, 3],
            [4, 5, 6, 7],
            [8, 9, 10, 11],
            [12, 13, 14, 15],
        ]);
        let values: Vec<_> = grid.iter().map(|(_, value)| *value).collect();
        assert_eq!(values, (0..16).collect::<Vec<_>>());
        assert_eq!(GridCoord::all().count(), 16);
        assert_eq!(grid.map(|coord, _| coord.row)[GridCoord::new(3, 0)], 3);
    }
}
