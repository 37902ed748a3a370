//! Page indicator state machine (pure).
//!
//! Nothing in here draws or sleeps. Every operation runs synchronously and
//! leaves model values final; presented values catch up through `tick`.

pub mod page_control;
pub mod scroll_coordinator;
pub mod size_classifier;
pub mod window_model;

// Re-export for convenience
pub use page_control::{
    PageControl, DEFAULT_ANIMATE_DURATION, DEFAULT_CURRENT_PAGE_INDICATOR_TINT,
    DEFAULT_PAGE_INDICATOR_TINT,
};
pub use scroll_coordinator::{Direction, ScrollCoordinator, ViewportLayout};
pub use size_classifier::SizeContext;
pub use window_model::{BuildOutcome, WindowMode, WindowModel, OVERSCAN};
