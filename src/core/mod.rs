mod engine;
mod ledger;
mod observation;
mod session;

pub use engine::{CellVisibility, GridWorldEngine, START_POSITION, StepOutcome, StepStatus};
pub use ledger::{EpisodeLedger, FULL_BATTERY, StepDeltas};
pub use observation::Observation;
pub use session::{EpisodePhase, Session, SessionEvent};
