use anyhow::{Result, anyhow};
use bevy::prelude::*;
use rover_dig_sim::{DisplayConfig, KeyBindings};
use serde_json::Value;

use super::resources::{CommandIssued, InputMap};

/// Resolves a key by its `KeyCode` variant name, e.g. `"KeyD"` or `"F1"`.
pub fn key_code_from_name(name: &str) -> Option<KeyCode> {
    serde_json::from_value(Value::String(name.to_string())).ok()
}

pub fn build_input_map(display: &DisplayConfig) -> Result<KeyBindings<KeyCode>> {
    let named = if display.bindings.is_empty() {
        KeyBindings::default_named()
    } else {
        KeyBindings::from_named(display.binding_pairs())?
    };

    let mut bindings = KeyBindings::new();
    for (name, command) in named.iter() {
        let code = key_code_from_name(name).ok_or_else(|| anyhow!("unknown key name `{name}`"))?;
        bindings.bind(code, command)?;
    }
    Ok(bindings)
}

pub fn handle_keyboard_controls(
    keys: Res<ButtonInput<KeyCode>>,
    input_map: Res<InputMap>,
    mut issued: EventWriter<CommandIssued>,
) {
    for key in keys.get_just_pressed() {
        if let Some(command) = input_map.0.lookup(key) {
            issued.send(CommandIssued(command));
        }
    }
}
