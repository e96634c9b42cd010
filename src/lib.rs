pub mod config;
pub mod controls;
pub mod core;
pub mod model;

pub use config::{
    BindingEntry, DISPLAY_CONFIG_ENV, DisplayConfig, load_display_config,
    load_display_config_from_path,
};
pub use controls::{BindingError, DEFAULT_KEY_NAMES, KeyBindings};
pub use self::core::{
    CellVisibility, EpisodeLedger, EpisodePhase, FULL_BATTERY, GridWorldEngine, Observation,
    START_POSITION, Session, SessionEvent, StepDeltas, StepOutcome, StepStatus,
};
pub use model::{
    Action, COLS, CellGrid, Command, DEFAULT_DEPOSITS, DepositLayout, GridCoord, ParseCommandError,
    ROWS,
};
