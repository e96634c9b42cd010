use tracing::info;

use crate::model::Command;

use super::engine::{GridWorldEngine, StepOutcome};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EpisodePhase {
    #[default]
    Playing,
    Over {
        minerals_found: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Stepped(StepOutcome),
    EpisodeEnded {
        outcome: StepOutcome,
        minerals_found: u32,
    },
    EpisodeStarted,
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    engine: GridWorldEngine,
    phase: EpisodePhase,
    episodes_completed: u32,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_engine(engine: GridWorldEngine) -> Self {
        let phase = if engine.is_episode_over() {
            EpisodePhase::Over {
                minerals_found: engine.mineral_count(),
            }
        } else {
            EpisodePhase::Playing
        };
        Self {
            episodes_completed: u32::from(engine.is_episode_over()),
            engine,
            phase,
        }
    }

    pub fn engine(&self) -> &GridWorldEngine {
        &self.engine
    }

    pub fn phase(&self) -> EpisodePhase {
        self.phase
    }

    pub fn episodes_completed(&self) -> u32 {
        self.episodes_completed
    }

    pub fn submit(&mut self, command: Command) -> SessionEvent {
        match (self.phase, command) {
            (EpisodePhase::Playing, Command::Act(action)) => {
                let outcome = self.engine.apply_action(action);
                if !self.engine.is_episode_over() {
                    return SessionEvent::Stepped(outcome);
                }
                let minerals_found = self.engine.mineral_count();
                self.phase = EpisodePhase::Over { minerals_found };
                self.episodes_completed += 1;
                info!(
                    minerals_found,
                    reward = self.engine.reward(),
                    episode = self.episodes_completed,
                    "battery empty, episode over"
                );
                SessionEvent::EpisodeEnded {
                    outcome,
                    minerals_found,
                }
            }
            (EpisodePhase::Over { .. }, Command::Recharge) => {
                self.engine.reset();
                self.phase = EpisodePhase::Playing;
                info!(episode = self.episodes_completed + 1, "battery recharged");
                SessionEvent::EpisodeStarted
            }
            _ => SessionEvent::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EpisodePhase, Session, SessionEvent};
    use crate::core::FULL_BATTERY;
    use crate::model::{Action, Command};

    #[test]
    fn recharge_is_ignored_while_playing() {
        let mut session = Session::new();
        assert_eq!(session.submit(Command::Recharge), SessionEvent::Ignored);
        assert_eq!(session.submit(Command::ToggleXray), SessionEvent::Ignored);
        assert_eq!(session.phase(), EpisodePhase::Playing);
        assert_eq!(session.engine().battery(), FULL_BATTERY);
    }

    #[test]
    fn last_charge_moves_to_over() {
        let mut session = Session::new();
        session.submit(Command::Act(Action::MoveRight));
        for _ in 1..FULL_BATTERY - 1 {
            let event = session.submit(Command::Act(Action::Dig));
            assert!(matches!(event, SessionEvent::Stepped(_)));
        }

        let event = session.submit(Command::Act(Action::Scan));

        assert!(matches!(
            event,
            SessionEvent::EpisodeEnded {
                minerals_found: 2,
                ..
            }
        ));
        assert_eq!(session.phase(), EpisodePhase::Over { minerals_found: 2 });
        assert_eq!(session.episodes_completed(), 1);
    }
}
