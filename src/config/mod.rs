//! Configuration module.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    validate_dots, CliOverrides, ConfigError, ConfigFile, ResolvedConfig,
};

use serde::Deserialize;

/// Layout parameters of the dot strip.
///
/// A plain value: the control copies it and never mutates it. Replacing it
/// through [`crate::state::PageControl::set_config`] triggers a full rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DotConfig {
    /// Width of the visible window, in dots.
    pub display_count: usize,
    /// Diameter of a full-size dot.
    pub dot_size: f64,
    /// Gap added to every slot on top of the dot diameter.
    pub dot_space: f64,
    /// Diameter of an edge dot relative to `dot_size`.
    pub small_dot_size_ratio: f64,
    /// Diameter of a dot next to an edge dot relative to `dot_size`.
    pub medium_dot_size_ratio: f64,
}

impl DotConfig {
    /// Slot pitch used for all positioning.
    pub fn item_size(&self) -> f64 {
        self.dot_size + self.dot_space
    }
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            display_count: 7,
            dot_size: 6.0,
            dot_space: 4.0,
            small_dot_size_ratio: 0.5,
            medium_dot_size_ratio: 0.7,
        }
    }
}
