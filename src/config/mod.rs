mod display;
mod loader;

pub use display::{BindingEntry, DisplayConfig};
pub use loader::{DISPLAY_CONFIG_ENV, load_display_config, load_display_config_from_path};
