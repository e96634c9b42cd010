use tracing::{debug, info};

use crate::model::{Action, CellGrid, DepositLayout, GridCoord};

use super::ledger::{EpisodeLedger, StepDeltas};
use super::observation::Observation;

pub const START_POSITION: GridCoord = GridCoord::new(3, 0);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CellVisibility {
    #[default]
    Unseen,
    Seen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Applied,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub action: Action,
    pub status: StepStatus,
    pub deltas: StepDeltas,
    pub position: GridCoord,
    pub battery: u32,
    pub episode_over: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridWorldEngine {
    layout: DepositLayout,
    occupancy: CellGrid<u8>,
    minerals: CellGrid<u32>,
    visibility: CellGrid<CellVisibility>,
    position: GridCoord,
    ledger: EpisodeLedger,
}

impl Default for GridWorldEngine {
    fn default() -> Self {
        Self::with_layout(DepositLayout::default())
    }
}

impl GridWorldEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(layout: DepositLayout) -> Self {
        let mut occupancy = CellGrid::filled(0);
        occupancy[START_POSITION] = 1;
        Self {
            minerals: layout.grid().clone(),
            layout,
            occupancy,
            visibility: CellGrid::filled(CellVisibility::Unseen),
            position: START_POSITION,
            ledger: EpisodeLedger::default(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::with_layout(self.layout.clone());
    }

    pub fn apply_action(&mut self, action: Action) -> StepOutcome {
        if self.is_episode_over() {
            debug!(action = action.name(), "battery empty, action ignored");
            return self.outcome(action, StepStatus::Rejected, StepDeltas::default());
        }

        self.ledger.begin_step();
        self.ledger.drain_battery(1);

        match action {
            Action::MoveUp | Action::MoveDown | Action::MoveLeft | Action::MoveRight => {
                self.apply_move(action)
            }
            Action::Dig => self.dig(),
            Action::Scan => self.scan(),
        }

        self.outcome(action, StepStatus::Applied, self.ledger.step_deltas)
    }

    fn apply_move(&mut self, action: Action) {
        self.ledger.add_reward(-1);
        let target = action
            .movement()
            .and_then(|(d_row, d_col)| self.position.offset(d_row, d_col));
        if let Some(target) = target {
            self.occupancy[self.position] = 0;
            self.occupancy[target] = 1;
            self.position = target;
        }
        info!(
            action = action.name(),
            row = self.position.row,
            col = self.position.col,
            battery = self.ledger.battery,
            minerals = self.ledger.mineral_count,
            moved = target.is_some(),
            "move"
        );
    }

    fn dig(&mut self) {
        let deposit = &mut self.minerals[self.position];
        if *deposit > 0 {
            *deposit -= 1;
            self.ledger.collect_minerals(1);
            self.ledger.add_reward(1);
        } else {
            self.ledger.add_reward(-1);
        }
        info!(
            action = Action::Dig.name(),
            row = self.position.row,
            col = self.position.col,
            battery = self.ledger.battery,
            minerals = self.ledger.mineral_count,
            remaining = self.minerals[self.position],
            "dig"
        );
    }

    fn scan(&mut self) {
        self.visibility[self.position] = CellVisibility::Seen;
        for neighbor in self.position.orthogonal_neighbors() {
            self.visibility[neighbor] = CellVisibility::Seen;
        }
        info!(
            action = Action::Scan.name(),
            row = self.position.row,
            col = self.position.col,
            battery = self.ledger.battery,
            minerals = self.ledger.mineral_count,
            "scan"
        );
    }

    fn outcome(&self, action: Action, status: StepStatus, deltas: StepDeltas) -> StepOutcome {
        StepOutcome {
            action,
            status,
            deltas,
            position: self.position,
            battery: self.ledger.battery,
            episode_over: self.is_episode_over(),
        }
    }

    pub fn position(&self) -> GridCoord {
        self.position
    }

    pub fn battery(&self) -> u32 {
        self.ledger.battery
    }

    pub fn mineral_count(&self) -> u32 {
        self.ledger.mineral_count
    }

    pub fn reward(&self) -> i64 {
        self.ledger.reward
    }

    pub fn is_episode_over(&self) -> bool {
        self.ledger.is_depleted()
    }

    pub fn occupancy(&self) -> &CellGrid<u8> {
        &self.occupancy
    }

    pub fn minerals(&self) -> &CellGrid<u32> {
        &self.minerals
    }

    pub fn visibility(&self) -> &CellGrid<CellVisibility> {
        &self.visibility
    }

    pub fn visible_minerals(&self, xray: bool) -> CellGrid<Option<u32>> {
        self.minerals.map(|coord, quantity| {
            (xray || self.visibility[coord] == CellVisibility::Seen).then_some(*quantity)
        })
    }

    pub fn observe(&self, xray: bool) -> Observation {
        Observation {
            position: self.position,
            battery: self.ledger.battery,
            mineral_count: self.ledger.mineral_count,
            reward: self.ledger.reward,
            episode_over: self.is_episode_over(),
            occupancy: self.occupancy.clone(),
            minerals: self.visible_minerals(xray),
        }
    }
}
