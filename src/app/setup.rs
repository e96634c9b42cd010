use bevy::prelude::*;
use rover_dig_sim::{KeyBindings, Session};

use super::input::build_input_map;
use super::resources::{GridLayout, InputMap, RuntimeConfig, SessionState, ViewSettings};
use super::state::AppPhase;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Name::new("PrimaryCamera"), Camera2d));
}

pub fn bootstrap_session(
    mut commands: Commands,
    config: Res<RuntimeConfig>,
    mut next_phase: ResMut<NextState<AppPhase>>,
) {
    if let Some(err) = &config.load_error {
        warn!("display config rejected, using defaults: {err}");
    }

    let bindings = match build_input_map(&config.display) {
        Ok(bindings) => bindings,
        Err(err) => {
            warn!("key bindings rejected, using default controls: {err:#}");
            build_input_map(&Default::default()).unwrap_or_else(|err| {
                error!("default key bindings unusable: {err:#}");
                KeyBindings::new()
            })
        }
    };
    info!(keys = bindings.len(), "controls ready");

    commands.insert_resource(InputMap(bindings));
    commands.insert_resource(GridLayout::new(&config.display));
    commands.insert_resource(ViewSettings {
        xray: config.display.xray_on_start,
    });
    commands.insert_resource(SessionState {
        session: Session::new(),
    });

    next_phase.set(AppPhase::Playing);
}
