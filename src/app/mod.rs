mod input;
mod resources;
mod setup;
mod simulation;
mod state;
mod view;

use bevy::prelude::*;

pub use resources::RuntimeConfig;
use resources::{CommandIssued, GameOverScreen, PlayScreen};
use state::AppPhase;

pub struct RoverAppPlugin;

impl Plugin for RoverAppPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppPhase>()
            .init_resource::<RuntimeConfig>()
            .add_event::<CommandIssued>()
            .add_systems(Startup, setup::spawn_camera)
            .add_systems(OnEnter(AppPhase::Boot), setup::bootstrap_session)
            .add_systems(
                OnEnter(AppPhase::Playing),
                (view::spawn_board, view::spawn_hud),
            )
            .add_systems(OnExit(AppPhase::Playing), view::despawn_screen::<PlayScreen>)
            .add_systems(OnEnter(AppPhase::GameOver), view::spawn_game_over)
            .add_systems(
                OnExit(AppPhase::GameOver),
                view::despawn_screen::<GameOverScreen>,
            )
            .add_systems(
                Update,
                (input::handle_keyboard_controls, simulation::apply_commands)
                    .chain()
                    .run_if(not(in_state(AppPhase::Boot))),
            )
            .add_systems(
                Update,
                (view::refresh_tiles, view::refresh_labels, view::refresh_hud)
                    .after(simulation::apply_commands)
                    .run_if(in_state(AppPhase::Playing)),
            );
    }
}
