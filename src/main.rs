mod app;

use bevy::prelude::*;
use bevy::window::{PresentMode, Window};
use rover_dig_sim::load_display_config;

fn main() {
    let config = app::RuntimeConfig::from_load(load_display_config());
    let (width, height) = config.display.window_size();

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: config.display.window_title.clone(),
                resolution: (width, height).into(),
                present_mode: PresentMode::AutoVsync,
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(config)
        .add_plugins(app::RoverAppPlugin)
        .run();
}
