//! Fixed-size pool of dots standing in for an arbitrarily long page sequence.
//!
//! The pool is a deque addressed by position. Pages are never mapped to items
//! one-to-one: when the viewport shifts by one slot, the item falling off one
//! end gets a new logical index and is rotated to the other end.

use super::scroll_coordinator::{Direction, ViewportLayout};
use super::size_classifier::SizeContext;
use crate::config::DotConfig;
use crate::model::{DotItem, DotMetrics};
use ratatui::style::Color;
use std::collections::VecDeque;
use std::ops::Range;
use std::time::Duration;
use tracing::{debug, trace};

/// Extra slots kept alive on each side of the visible window while paging.
pub const OVERSCAN: usize = 2;

/// Whether the strip scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMode {
    /// Every page fits in the window; the strip never moves.
    Fits,
    /// More pages than slots; the strip scrolls and recycles.
    Paging,
}

/// What [`WindowModel::build`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    /// No pages: the pool was cleared.
    Empty,
    /// A new pool anchored at the start of the page sequence.
    Fresh,
    /// A new pool at the previous pool's index range.
    Preserved,
    /// Nothing to preserve and no reason to start fresh; pool untouched.
    Skipped,
}

/// Owner of the dot pool and of the slot geometry.
#[derive(Debug, Clone)]
pub struct WindowModel {
    items: VecDeque<DotItem>,
    metrics: DotMetrics,
    mode: Option<WindowMode>,
    display_count: usize,
    number_of_pages: usize,
}

impl WindowModel {
    /// An empty model; nothing exists until the first [`WindowModel::build`].
    pub fn new(config: &DotConfig) -> Self {
        Self {
            items: VecDeque::new(),
            metrics: DotMetrics::from(config),
            mode: None,
            display_count: 0,
            number_of_pages: 0,
        }
    }

    /// Rebuild the pool for `number_of_pages` pages with `current_page` selected.
    ///
    /// While `current_page` is inside the first window (or the window mode
    /// changed) the pool is created from scratch, anchored at the start.
    /// Otherwise it is recreated at the index range the previous pool covered,
    /// and without a previous pool nothing happens.
    pub fn build(
        &mut self,
        current_page: usize,
        number_of_pages: usize,
        config: &DotConfig,
    ) -> BuildOutcome {
        debug_assert!(config.display_count >= 1, "display_count must be at least 1");
        debug_assert!(config.dot_size > 0.0, "dot_size must be positive");

        self.metrics = DotMetrics::from(config);
        self.number_of_pages = number_of_pages;
        let display_count = config.display_count.min(number_of_pages);

        if number_of_pages == 0 {
            self.items.clear();
            self.mode = None;
            self.display_count = 0;
            debug!("No pages, pool cleared");
            return BuildOutcome::Empty;
        }

        let mode = if display_count < number_of_pages {
            WindowMode::Paging
        } else {
            WindowMode::Fits
        };
        let pool_len = pool_len(mode, display_count);

        let (range, outcome) = if current_page < display_count {
            (fresh_range(mode, display_count), BuildOutcome::Fresh)
        } else {
            let Some(first) = self.items.front().map(DotItem::index) else {
                trace!(current_page, "No pool to preserve, build skipped");
                return BuildOutcome::Skipped;
            };
            if self.mode == Some(mode) {
                (first..first + pool_len as isize, BuildOutcome::Preserved)
            } else {
                (fresh_range(mode, display_count), BuildOutcome::Fresh)
            }
        };

        debug!(
            ?mode,
            ?outcome,
            start = range.start,
            end = range.end,
            display_count,
            number_of_pages,
            "Rebuilt dot pool"
        );

        let metrics = self.metrics;
        self.items = range.map(|index| DotItem::new(metrics, index)).collect();
        self.mode = Some(mode);
        self.display_count = display_count;
        outcome
    }

    /// Shift the pool one slot in `direction`.
    ///
    /// Returns the logical index the recycled item was moved to, or `None`
    /// for [`Direction::Stay`] or an empty pool.
    pub fn recycle(&mut self, direction: Direction) -> Option<isize> {
        let moved_to = match direction {
            Direction::Left => {
                let index = self.items.front()?.index() - 1;
                let mut item = self.items.pop_back()?;
                item.reassign(index);
                self.items.push_front(item);
                index
            }
            Direction::Right => {
                let index = self.items.back()?.index() + 1;
                let mut item = self.items.pop_front()?;
                item.reassign(index);
                self.items.push_back(item);
                index
            }
            Direction::Stay => return None,
        };
        trace!(?direction, moved_to, "Recycled dot");
        Some(moved_to)
    }

    /// Paint the dot at `current_page` with `current` and every other dot with `normal`.
    pub fn apply_colors(&mut self, current_page: usize, normal: Color, current: Color) {
        for item in &mut self.items {
            let color = if item.index() == current_page as isize {
                current
            } else {
                normal
            };
            item.set_color(color);
        }
    }

    /// Reclassify every item against `context`, animating over `duration`.
    pub fn apply_sizes(&mut self, context: &SizeContext, duration: Duration) {
        for item in &mut self.items {
            let state = context.classify(item.index());
            item.set_state(state, duration);
        }
    }

    /// Slot geometry for the current page count.
    pub fn layout(&self) -> ViewportLayout {
        ViewportLayout {
            item_size: self.metrics.item_size,
            display_count: self.display_count,
            number_of_pages: self.number_of_pages,
        }
    }

    /// Advance every item's size animation.
    pub fn tick(&mut self, dt: Duration) {
        for item in &mut self.items {
            item.tick(dt);
        }
    }

    /// Whether any item is still resizing.
    pub fn is_animating(&self) -> bool {
        self.items.iter().any(DotItem::is_animating)
    }

    /// Items in slot order, left to right.
    pub fn items(&self) -> impl Iterator<Item = &DotItem> {
        self.items.iter()
    }

    /// Number of live items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Logical index range covered by the pool, `None` when empty.
    pub fn index_range(&self) -> Option<Range<isize>> {
        let first = self.items.front()?.index();
        let last = self.items.back()?.index();
        Some(first..last + 1)
    }

    /// Window mode of the last successful build.
    pub fn mode(&self) -> Option<WindowMode> {
        self.mode
    }

    /// Sizing parameters of the pool.
    pub fn metrics(&self) -> DotMetrics {
        self.metrics
    }
}

fn pool_len(mode: WindowMode, display_count: usize) -> usize {
    match mode {
        WindowMode::Fits => display_count,
        WindowMode::Paging => display_count + 2 * OVERSCAN,
    }
}

fn fresh_range(mode: WindowMode, display_count: usize) -> Range<isize> {
    let display_count = display_count as isize;
    match mode {
        WindowMode::Fits => 0..display_count,
        WindowMode::Paging => {
            let overscan = OVERSCAN as isize;
            -overscan..display_count + overscan
        }
    }
}

#[cfg(test)]
#[path = "window_model_tests.rs"]
mod tests;
