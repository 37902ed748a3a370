//! Dot glyphs and color handling for the terminal renderer.

use crate::model::DotMetrics;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Colors off, regardless of environment.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }

    /// Style for a dot of `color`.
    ///
    /// Without colors the current dot is set apart with bold instead.
    pub fn dot_style(self, color: Color, is_current: bool) -> Style {
        if self.enabled {
            Style::default().fg(color)
        } else if is_current {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::from_env_and_args(false)
    }
}

// ===== DotGlyph =====

/// Terminal glyph used for a dot at a given presented diameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotGlyph {
    /// Nothing drawn.
    Hidden,
    /// `·`
    Small,
    /// `•`
    Medium,
    /// `●`
    Normal,
}

impl DotGlyph {
    /// Pick the glyph closest to `diameter`.
    ///
    /// Thresholds sit halfway between neighbouring size states, so a dot
    /// mid-transition switches glyph at the midpoint of its animation.
    pub fn for_diameter(diameter: f64, metrics: &DotMetrics) -> Self {
        if metrics.dot_size <= 0.0 {
            return DotGlyph::Hidden;
        }
        let ratio = diameter / metrics.dot_size;
        if ratio >= (metrics.medium_ratio + 1.0) / 2.0 {
            DotGlyph::Normal
        } else if ratio >= (metrics.small_ratio + metrics.medium_ratio) / 2.0 {
            DotGlyph::Medium
        } else if ratio >= metrics.small_ratio / 2.0 {
            DotGlyph::Small
        } else {
            DotGlyph::Hidden
        }
    }

    /// Symbol written into the cell, `None` when hidden.
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            DotGlyph::Hidden => None,
            DotGlyph::Small => Some("·"),
            DotGlyph::Medium => Some("•"),
            DotGlyph::Normal => Some("●"),
        }
    }
}
