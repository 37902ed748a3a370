//! Domain model types (pure).
//!
//! All types in this module are plain data with no knowledge of the terminal.

pub mod dot_item;
pub mod error;
pub mod geometry;
pub mod key_action;

// Re-export for convenience
pub use dot_item::{DotItem, DotMetrics, SizeState};
pub use error::AppError;
pub use geometry::{Frame, Insets, Size};
pub use key_action::KeyAction;
