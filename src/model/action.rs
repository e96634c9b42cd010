use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Dig,
    Scan,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Self::MoveUp,
        Self::MoveDown,
        Self::MoveLeft,
        Self::MoveRight,
        Self::Dig,
        Self::Scan,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::MoveUp => "move_up",
            Self::MoveDown => "move_down",
            Self::MoveLeft => "move_left",
            Self::MoveRight => "move_right",
            Self::Dig => "dig",
            Self::Scan => "scan",
        }
    }

    /// Row/column step for movement actions. Up raises the row index and
    /// Down lowers it.
    pub fn movement(self) -> Option<(isize, isize)> {
        match self {
            Self::MoveUp => Some((1, 0)),
            Self::MoveDown => Some((-1, 0)),
            Self::MoveLeft => Some((0, -1)),
            Self::MoveRight => Some((0, 1)),
            Self::Dig | Self::Scan => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Act(Action),
    ToggleXray,
    Recharge,
}

impl Command {
    pub fn name(self) -> &'static str {
        match self {
            Self::Act(action) => action.name(),
            Self::ToggleXray => "toggle_xray",
            Self::Recharge => "recharge",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Action> for Command {
    fn from(action: Action) -> Self {
        Self::Act(action)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("unknown action `{0}`")]
    UnknownAction(String),
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
}

impl FromStr for Action {
    type Err = ParseCommandError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let name = raw.trim();
        Self::ALL
            .into_iter()
            .find(|action| action.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseCommandError::UnknownAction(name.to_string()))
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let name = raw.trim();
        if name.eq_ignore_ascii_case(Self::ToggleXray.name()) {
            return Ok(Self::ToggleXray);
        }
        if name.eq_ignore_ascii_case(Self::Recharge.name()) {
            return Ok(Self::Recharge);
        }
        name.parse::<Action>()
            .map(Self::Act)
            .map_err(|_| ParseCommandError::UnknownCommand(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, Command, ParseCommandError};

    #[test]
    fn names_parse_back_to_variants() {
        for action in Action::ALL {
            assert_eq!(action.name().parse::<Action>(), Ok(action));
            assert_eq!(action.name().parse::<Command>(), Ok(Command::Act(action)));
        }
        assert_eq!(" Toggle_Xray ".parse::<Command>(), Ok(Command::ToggleXray));
        assert_eq!("recharge".parse::<Command>(), Ok(Command::Recharge));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            "jump".parse::<Action>(),
            Err(ParseCommandError::UnknownAction("jump".to_string()))
        );
        assert_eq!(
            "recharge".parse::<Action>(),
            Err(ParseCommandError::UnknownAction("recharge".to_string()))
        );
        assert_eq!(
            "fly".parse::<Command>(),
            Err(ParseCommandError::UnknownCommand("fly".to_string()))
        );
    }

    #[test]
    fn only_moves_have_a_step() {
        assert_eq!(Action::MoveUp.movement(), Some((1, 0)));
        assert_eq!(Action::MoveDown.movement(), Some((-1, 0)));
        assert_eq!(Action::MoveLeft.movement(), Some((0, -1)));
        assert_eq!(Action::MoveRight.movement(), Some((0, 1)));
        assert_eq!(Action::Dig.movement(), None);
        assert_eq!(Action::Scan.movement(), None);
    }
}
