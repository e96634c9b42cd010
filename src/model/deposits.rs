use super::grid::{COLS, CellGrid, ROWS};

pub const DEFAULT_DEPOSITS: [[u32; COLS]; ROWS] = [
    [0, 2, 3, 0],
    [0, 1, 1, 0],
    [1, 3, 0, 2],
    [0, 2, 0, 4],
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositLayout {
    quantities: CellGrid<u32>,
}

impl Default for DepositLayout {
    fn default() -> Self {
        Self::new(DEFAULT_DEPOSITS)
    }
}

impl DepositLayout {
    pub const fn new(rows: [[u32; COLS]; ROWS]) -> Self {
        Self {
            quantities: CellGrid::from_rows(rows),
        }
    }

    pub fn total(&self) -> u32 {
        self.quantities.iter().map(|(_, quantity)| *quantity).sum()
    }

    pub fn grid(&self) -> &CellGrid<u32> {
        &self.quantities
    }
}

#[cfg(test)]
mod tests {
    use super::DepositLayout;
    use crate::model::GridCoord;

    #[test]
    fn default_layout_matches_scenario() {
        let layout = DepositLayout::default();
        assert_eq!(layout.total(), 19);
        assert_eq!(layout.grid()[GridCoord::new(3, 0)], 0);
        assert_eq!(layout.grid()[GridCoord::new(0, 2)], 3);
        assert_eq!(layout.grid()[GridCoord::new(3, 3)], 4);
    }
}
