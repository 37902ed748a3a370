//! A single recyclable dot.

use super::geometry::{Frame, Size};
use crate::animation::{Easing, Tween};
use crate::config::DotConfig;
use ratatui::style::Color;
use std::time::Duration;

/// Discrete size of a dot, derived from its distance to the window edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeState {
    /// Not a real page (outside `[0, number_of_pages)`); zero diameter.
    None,
    /// Outermost visible dot on either side.
    Small,
    /// Second dot from either side.
    Medium,
    /// Full size.
    #[default]
    Normal,
}

/// Sizing parameters shared by every item of a pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotMetrics {
    /// Full dot diameter.
    pub dot_size: f64,
    /// Slot pitch.
    pub item_size: f64,
    /// Small diameter relative to `dot_size`.
    pub small_ratio: f64,
    /// Medium diameter relative to `dot_size`.
    pub medium_ratio: f64,
}

impl DotMetrics {
    /// Diameter a dot takes in `state`.
    pub fn diameter(&self, state: SizeState) -> f64 {
        match state {
            SizeState::None => 0.0,
            SizeState::Small => self.dot_size * self.small_ratio,
            SizeState::Medium => self.dot_size * self.medium_ratio,
            SizeState::Normal => self.dot_size,
        }
    }

    /// Left edge of the slot for logical index `index`.
    pub fn slot_start(&self, index: isize) -> f64 {
        index as f64 * self.item_size
    }

    /// Right edge of the slot for logical index `index`.
    pub fn slot_end(&self, index: isize) -> f64 {
        self.slot_start(index) + self.item_size
    }
}

impl From<&DotConfig> for DotMetrics {
    fn from(config: &DotConfig) -> Self {
        Self {
            dot_size: config.dot_size,
            item_size: config.item_size(),
            small_ratio: config.small_dot_size_ratio,
            medium_ratio: config.medium_dot_size_ratio,
        }
    }
}

/// One visual dot of the pool.
///
/// Items are created when the pool is rebuilt and afterwards only recycled:
/// [`DotItem::reassign`] rewrites the logical index in place, keeping the
/// in-flight diameter animation intact.
#[derive(Debug, Clone, PartialEq)]
pub struct DotItem {
    index: isize,
    color: Color,
    state: SizeState,
    diameter: Tween,
    metrics: DotMetrics,
}

impl DotItem {
    /// Create a full-size dot at logical index `index`.
    pub fn new(metrics: DotMetrics, index: isize) -> Self {
        Self {
            index,
            color: Color::Gray,
            state: SizeState::Normal,
            diameter: Tween::settled(metrics.dot_size).with_easing(Easing::EaseInOut),
            metrics,
        }
    }

    /// Logical page index. May be negative or past the last page.
    pub fn index(&self) -> isize {
        self.index
    }

    /// Move this item to another logical slot.
    pub fn reassign(&mut self, index: isize) {
        self.index = index;
    }

    /// Fill color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the fill color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Current size state.
    pub fn state(&self) -> SizeState {
        self.state
    }

    /// Assign a size state and start the diameter transition towards it.
    pub fn set_state(&mut self, state: SizeState, duration: Duration) {
        self.state = state;
        self.diameter.animate_to(self.metrics.diameter(state), duration);
    }

    /// Slot rectangle this item occupies in content coordinates.
    pub fn frame(&self) -> Frame {
        Frame::new(
            self.metrics.slot_start(self.index),
            0.0,
            Size::square(self.metrics.item_size),
        )
    }

    /// Rectangle of the visible dot, centered in the slot at its presented diameter.
    pub fn dot_frame(&self) -> Frame {
        let slot = self.frame();
        let diameter = self.presented_diameter();
        Frame::new(
            slot.mid_x() - diameter / 2.0,
            slot.mid_y() - diameter / 2.0,
            Size::square(diameter),
        )
    }

    /// Diameter currently on screen, mid-animation included.
    pub fn presented_diameter(&self) -> f64 {
        self.diameter.value()
    }

    /// Diameter the current state resolves to once animations settle.
    pub fn target_diameter(&self) -> f64 {
        self.diameter.target()
    }

    /// Advance the diameter animation.
    pub fn tick(&mut self, dt: Duration) {
        self.diameter.tick(dt);
    }

    /// Whether the diameter is still moving.
    pub fn is_animating(&self) -> bool {
        !self.diameter.is_settled()
    }

    /// Metrics this item was built with.
    pub fn metrics(&self) -> DotMetrics {
        self.metrics
    }
}
