pub const FULL_BATTERY: u32 = 50;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepDeltas {
    pub battery_used: u32,
    pub minerals: u32,
    pub reward: i64,
}

impl StepDeltas {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeLedger {
    pub battery: u32,
    pub mineral_count: u32,
    pub reward: i64,
    pub step_deltas: StepDeltas,
}

impl Default for EpisodeLedger {
    fn default() -> Self {
        Self {
            battery: FULL_BATTERY,
            mineral_count: 0,
            reward: 0,
            step_deltas: StepDeltas::default(),
        }
    }
}

impl EpisodeLedger {
    pub fn begin_step(&mut self) {
        self.step_deltas.reset();
    }

    pub fn drain_battery(&mut self, amount: u32) -> u32 {
        let drained = self.battery.min(amount);
        if drained > 0 {
            self.battery -= drained;
            self.step_deltas.battery_used += drained;
        }
        drained
    }

    pub fn collect_minerals(&mut self, amount: u32) {
        if amount == 0 {
            return;
        }
        self.mineral_count = self.mineral_count.saturating_add(amount);
        self.step_deltas.minerals += amount;
    }

    pub fn add_reward(&mut self, amount: i64) {
        self.reward = self.reward.saturating_add(amount);
        self.step_deltas.reward += amount;
    }

    pub fn is_depleted(&self) -> bool {
        self.battery == 0
    }
}
