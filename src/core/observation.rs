use serde::Serialize;

use crate::model::{CellGrid, GridCoord};

/// Read-only snapshot of an episode, suitable for logging or for feeding an
/// external policy as JSON. Unseen mineral cells are `None` unless the
/// snapshot was taken with x-ray.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observation {
    pub position: GridCoord,
    pub battery: u32,
    pub mineral_count: u32,
    pub reward: i64,
    pub episode_over: bool,
    pub occupancy: CellGrid<u8>,
    pub minerals: CellGrid<Option<u32>>,
}
