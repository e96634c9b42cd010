mod action;
mod deposits;
mod grid;

pub use action::{Action, Command, ParseCommandError};
pub use deposits::{DEFAULT_DEPOSITS, DepositLayout};
pub use grid::{COLS, CellGrid, GridCoord, ROWS};
