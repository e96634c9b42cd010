mod bindings;

pub use bindings::{BindingError, DEFAULT_KEY_NAMES, KeyBindings};
