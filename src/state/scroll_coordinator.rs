//! Viewport offset decisions.
//!
//! The first and last page pin the strip to its extremes. Everywhere else the
//! strip moves by at most one slot per update, only when the target page is
//! about to reach the outer two slots of the viewport.

use super::window_model::{WindowModel, OVERSCAN};
use crate::animation::Tween;
use crate::model::Insets;
use std::time::Duration;
use tracing::trace;

/// Which way the viewport moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Offset decreased; earlier pages come into view.
    Left,
    /// Offset increased; later pages come into view.
    Right,
    /// Offset unchanged.
    Stay,
}

impl Direction {
    /// Direction of travel from offset `old` to offset `new`.
    pub fn between(old: f64, new: f64) -> Self {
        if new > old {
            Direction::Right
        } else if new < old {
            Direction::Left
        } else {
            Direction::Stay
        }
    }
}

/// Slot geometry of the scrollable strip.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportLayout {
    /// Slot pitch.
    pub item_size: f64,
    /// Slots visible at once.
    pub display_count: usize,
    /// Total number of pages.
    pub number_of_pages: usize,
}

impl ViewportLayout {
    /// Width of every page slot laid end to end.
    pub fn content_width(&self) -> f64 {
        self.item_size * self.number_of_pages as f64
    }

    /// Visible width.
    pub fn viewport_width(&self) -> f64 {
        self.item_size * self.display_count as f64
    }

    /// Whether there are more pages than visible slots.
    pub fn is_paging(&self) -> bool {
        self.display_count < self.number_of_pages
    }

    /// Overscan padding exposed when the strip is pinned to either end.
    pub fn insets(&self) -> Insets {
        if self.is_paging() {
            Insets::horizontal(self.item_size * OVERSCAN as f64)
        } else {
            Insets::ZERO
        }
    }

    /// Smallest legal offset.
    pub fn min_offset(&self) -> f64 {
        -self.insets().left
    }

    /// Largest legal offset.
    pub fn max_offset(&self) -> f64 {
        self.content_width() - self.viewport_width() + self.insets().right
    }
}

/// Owns the viewport offset and its animation.
#[derive(Debug, Clone, Default)]
pub struct ScrollCoordinator {
    layout: ViewportLayout,
    offset: Tween,
}

impl ScrollCoordinator {
    /// A coordinator at offset zero with an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt a new layout. The offset is left where it is.
    pub fn configure(&mut self, layout: ViewportLayout) {
        self.layout = layout;
    }

    /// Snap the offset back to the start of the content.
    pub fn reset(&mut self) {
        self.offset.snap_to(0.0);
    }

    /// Offset the viewport should scroll to for `current_page`.
    ///
    /// Pure: reads the logical offset and the layout, changes nothing.
    pub fn target_offset(&self, current_page: usize) -> f64 {
        let layout = &self.layout;
        let offset = self.offset();
        let item_size = layout.item_size;
        let slot_start = current_page as f64 * item_size;

        if current_page == 0 {
            layout.min_offset()
        } else if current_page + 1 == layout.number_of_pages {
            layout.max_offset()
        } else if slot_start <= offset + item_size {
            offset - item_size
        } else if slot_start + item_size >= offset + layout.viewport_width() - item_size {
            offset + item_size
        } else {
            offset
        }
    }

    /// Move the viewport for `current_page`, recycling one pool item on a move.
    ///
    /// The recycle happens before the transition starts so the slot being
    /// exposed already holds a correctly indexed dot.
    pub fn update_position(
        &mut self,
        current_page: usize,
        duration: Duration,
        window: &mut WindowModel,
    ) -> Direction {
        let old = self.offset();
        let new = self.target_offset(current_page);
        let direction = Direction::between(old, new);
        if direction == Direction::Stay {
            return direction;
        }

        window.recycle(direction);
        trace!(current_page, old, new, ?direction, "Scrolling dot strip");
        self.offset.animate_to(new, duration);
        direction
    }

    /// Logical offset: the value decisions are made against.
    pub fn offset(&self) -> f64 {
        self.offset.target()
    }

    /// Offset currently on screen.
    pub fn presented_offset(&self) -> f64 {
        self.offset.value()
    }

    /// Current layout.
    pub fn layout(&self) -> ViewportLayout {
        self.layout
    }

    /// Advance the offset animation.
    pub fn tick(&mut self, dt: Duration) {
        self.offset.tick(dt);
    }

    /// Whether the offset is still moving.
    pub fn is_animating(&self) -> bool {
        !self.offset.is_settled()
    }
}

#[cfg(test)]
#[path = "scroll_coordinator_tests.rs"]
mod tests;
