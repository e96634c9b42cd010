use serde::{Deserialize, Serialize};

use crate::model::{COLS, ROWS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub window_title: String,
    pub cell_size: f32,
    pub margin: f32,
    pub hud_font_size: f32,
    pub label_font_size: f32,
    pub xray_on_start: bool,
    pub bindings: Vec<BindingEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingEntry {
    pub key: String,
    pub command: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            window_title: "Mars Rover Digging Simulation".to_string(),
            cell_size: 50.0,
            margin: 1.0,
            hud_font_size: 10.0,
            label_font_size: 30.0,
            xray_on_start: true,
            bindings: Vec::new(),
        }
    }
}

impl DisplayConfig {
    pub fn window_size(&self) -> (f32, f32) {
        let stride = self.cell_size + self.margin;
        (
            stride * COLS as f32 + self.margin,
            stride * ROWS as f32 + self.margin,
        )
    }

    pub fn binding_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings
            .iter()
            .map(|entry| (entry.key.as_str(), entry.command.as_str()))
    }
}
