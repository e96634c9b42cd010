use bevy::prelude::*;
use rover_dig_sim::{Command, DisplayConfig, GridCoord, KeyBindings, Session};

#[derive(Resource, Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub display: DisplayConfig,
    pub load_error: Option<String>,
}

impl RuntimeConfig {
    pub fn from_load(result: anyhow::Result<DisplayConfig>) -> Self {
        match result {
            Ok(display) => Self {
                display,
                load_error: None,
            },
            Err(err) => Self {
                display: DisplayConfig::default(),
                load_error: Some(format!("{err:#}")),
            },
        }
    }
}

#[derive(Resource, Debug)]
pub struct SessionState {
    pub session: Session,
}

#[derive(Resource, Debug, Clone, Copy)]
pub struct ViewSettings {
    pub xray: bool,
}

#[derive(Resource, Debug)]
pub struct InputMap(pub KeyBindings<KeyCode>);

#[derive(Event, Debug, Clone, Copy)]
pub struct CommandIssued(pub Command);

#[derive(Resource, Debug, Clone, Copy)]
pub struct GridLayout {
    pub origin: Vec2,
    pub cell_size: f32,
    pub margin: f32,
}

impl GridLayout {
    pub fn new(display: &DisplayConfig) -> Self {
        let (width, height) = display.window_size();
        Self {
            origin: Vec2::new(-width * 0.5, -height * 0.5),
            cell_size: display.cell_size,
            margin: display.margin,
        }
    }

    /// Row 0 sits at the bottom, so a move up (row + 1) goes up on screen.
    pub fn cell_center(&self, coord: GridCoord) -> Vec3 {
        let stride = self.cell_size + self.margin;
        let x = self.origin.x + coord.col as f32 * stride + self.cell_size * 0.5 + self.margin;
        let y = self.origin.y + coord.row as f32 * stride + self.cell_size * 0.5 + self.margin;
        Vec3::new(x, y, 0.0)
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct GridTile {
    pub coord: GridCoord,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct MineralLabel {
    pub coord: GridCoord,
}

#[derive(Component)]
pub struct HudText;

#[derive(Component)]
pub struct PlayScreen;

#[derive(Component)]
pub struct GameOverScreen;
