use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use thiserror::Error;

use crate::model::{Action, Command, ParseCommandError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("key {key} is already bound to `{existing}`")]
    AlreadyBound { key: String, existing: Command },
    #[error(transparent)]
    Command(#[from] ParseCommandError),
}

pub const DEFAULT_KEY_NAMES: [(&str, Command); 9] = [
    ("ArrowUp", Command::Act(Action::MoveUp)),
    ("ArrowDown", Command::Act(Action::MoveDown)),
    ("ArrowLeft", Command::Act(Action::MoveLeft)),
    ("ArrowRight", Command::Act(Action::MoveRight)),
    ("KeyD", Command::Act(Action::Dig)),
    ("KeyS", Command::Act(Action::Scan)),
    ("KeyH", Command::ToggleXray),
    ("Enter", Command::Recharge),
    ("NumpadEnter", Command::Recharge),
];

#[derive(Debug, Clone)]
pub struct KeyBindings<K> {
    table: HashMap<K, Command>,
}

impl<K> Default for KeyBindings<K> {
    fn default() -> Self {
        Self {
            table: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Debug> KeyBindings<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (K, Command)>) -> Result<Self, BindingError> {
        let mut bindings = Self::new();
        for (key, command) in pairs {
            bindings.bind(key, command)?;
        }
        Ok(bindings)
    }

    pub fn bind(&mut self, key: K, command: Command) -> Result<(), BindingError> {
        if let Some(existing) = self.table.get(&key) {
            return Err(BindingError::AlreadyBound {
                key: format!("{key:?}"),
                existing: *existing,
            });
        }
        self.table.insert(key, command);
        Ok(())
    }

    pub fn lookup(&self, key: &K) -> Option<Command> {
        self.table.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, Command)> {
        self.table.iter().map(|(key, command)| (key, *command))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl KeyBindings<String> {
    pub fn default_named() -> Self {
        Self {
            table: DEFAULT_KEY_NAMES
                .into_iter()
                .map(|(name, command)| (name.to_string(), command))
                .collect(),
        }
    }

    pub fn from_named<'a>(
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, BindingError> {
        let mut bindings = Self::new();
        for (key, command) in entries {
            bindings.bind(key.to_string(), command.parse()?)?;
        }
        Ok(bindings)
    }
}

#[cfg(test)]
mod tests {
    use super::{BindingError, DEFAULT_KEY_NAMES, KeyBindings};
    use crate::model::{Action, Command, ParseCommandError};

    #[test]
    fn default_names_cover_every_command() {
        let bindings = KeyBindings::default_named();
        assert_eq!(bindings.len(), DEFAULT_KEY_NAMES.len());

        for action in Action::ALL {
            assert!(
                DEFAULT_KEY_NAMES
                    .iter()
                    .any(|(_, command)| *command == Command::Act(action)),
                "{action} has no default key"
            );
        }
        assert_eq!(
            bindings.lookup(&"KeyH".to_string()),
            Some(Command::ToggleXray)
        );
        assert_eq!(bindings.lookup(&"KeyQ".to_string()), None);
    }

    #[test]
    fn duplicate_binding_is_rejected() {
        let result = KeyBindings::from_pairs([
            ('d', Command::Act(Action::Dig)),
            ('d', Command::Act(Action::Scan)),
        ]);

        assert_eq!(
            result.err(),
            Some(BindingError::AlreadyBound {
                key: "'d'".to_string(),
                existing: Command::Act(Action::Dig),
            })
        );
    }

    #[test]
    fn unbound_keys_map_to_nothing() {
        let bindings =
            KeyBindings::from_pairs([('s', Command::Act(Action::Scan))]).expect("bindings");
        assert_eq!(bindings.lookup(&'s'), Some(Command::Act(Action::Scan)));
        assert_eq!(bindings.lookup(&'x'), None);
        assert!(!bindings.is_empty());
    }

    #[test]
    fn named_entries_validate_command_names() {
        let bindings = KeyBindings::from_named([("KeyW", "move_up"), ("Space", "dig")])
            .expect("valid names");
        assert_eq!(
            bindings.lookup(&"KeyW".to_string()),
            Some(Command::Act(Action::MoveUp))
        );

        let err = KeyBindings::from_named([("KeyW", "teleport")]).expect_err("unknown command");
        assert_eq!(
            err,
            BindingError::Command(ParseCommandError::UnknownCommand("teleport".to_string()))
        );
    }
}
