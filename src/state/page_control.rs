//! Host-facing page indicator state.
//!
//! [`PageControl`] is the only type hosts talk to. Every setter runs
//! synchronously: the pool, the offset and every dot's size state are up to
//! date when it returns, and only the presented values lag behind until the
//! animations are ticked to completion.

use super::scroll_coordinator::{ScrollCoordinator, ViewportLayout};
use super::size_classifier::SizeContext;
use super::window_model::{BuildOutcome, WindowMode, WindowModel};
use crate::config::DotConfig;
use crate::model::{DotItem, Insets, Size};
use ratatui::style::Color;
use std::time::Duration;
use tracing::{debug, trace};

/// Default color of dots other than the current one.
pub const DEFAULT_PAGE_INDICATOR_TINT: Color = Color::Rgb(219, 219, 219);

/// Default color of the current page's dot.
pub const DEFAULT_CURRENT_PAGE_INDICATOR_TINT: Color = Color::Rgb(82, 150, 232);

/// Default duration of position and size transitions.
pub const DEFAULT_ANIMATE_DURATION: Duration = Duration::from_millis(300);

/// A compact page indicator.
///
/// # Examples
///
/// ```rust
/// use pagedots::state::PageControl;
///
/// let mut control = PageControl::new();
/// control.set_number_of_pages(20);
/// control.set_current_page(1);
/// assert_eq!(control.current_page(), 1);
///
/// // Out of range assignments are ignored.
/// control.set_current_page(42);
/// assert_eq!(control.current_page(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct PageControl {
    config: DotConfig,
    current_page: usize,
    number_of_pages: usize,
    display_count: usize,
    page_indicator_tint_color: Color,
    current_page_indicator_tint_color: Color,
    animate_duration: Duration,
    hides_for_single_page: bool,
    window: WindowModel,
    scroll: ScrollCoordinator,
}

impl PageControl {
    /// A control with the default [`DotConfig`] and no pages.
    pub fn new() -> Self {
        Self::with_config(DotConfig::default())
    }

    /// A control with an explicit layout and no pages.
    pub fn with_config(config: DotConfig) -> Self {
        Self {
            config,
            current_page: 0,
            number_of_pages: 0,
            display_count: 0,
            page_indicator_tint_color: DEFAULT_PAGE_INDICATOR_TINT,
            current_page_indicator_tint_color: DEFAULT_CURRENT_PAGE_INDICATOR_TINT,
            animate_duration: DEFAULT_ANIMATE_DURATION,
            hides_for_single_page: false,
            window: WindowModel::new(&config),
            scroll: ScrollCoordinator::new(),
        }
    }

    // ===== Properties =====

    /// Select `page` and animate the strip towards it.
    ///
    /// Pages outside `[0, number_of_pages)` are ignored without any state
    /// change, so late page events from a host can be forwarded unchecked.
    pub fn set_current_page(&mut self, page: usize) {
        if page >= self.number_of_pages {
            trace!(
                page,
                number_of_pages = self.number_of_pages,
                "Ignoring out of range page"
            );
            return;
        }
        self.current_page = page;
        self.update_dot(page, true);
    }

    /// Change the page count and rebuild.
    ///
    /// A current page that no longer exists is clamped to the last page, or
    /// to zero when no pages are left.
    pub fn set_number_of_pages(&mut self, number_of_pages: usize) {
        self.number_of_pages = number_of_pages;
        if self.current_page >= number_of_pages {
            self.current_page = number_of_pages.saturating_sub(1);
        }
        self.display_count = self.config.display_count.min(number_of_pages);
        self.update();
    }

    /// Replace the layout parameters and rebuild.
    pub fn set_config(&mut self, config: DotConfig) {
        self.config = config;
        self.display_count = config.display_count.min(self.number_of_pages);
        self.update();
    }

    /// Color of every dot except the current one.
    pub fn set_page_indicator_tint_color(&mut self, color: Color) {
        self.page_indicator_tint_color = color;
        self.update_dot_color();
    }

    /// Color of the current page's dot.
    pub fn set_current_page_indicator_tint_color(&mut self, color: Color) {
        self.current_page_indicator_tint_color = color;
        self.update_dot_color();
    }

    /// Duration of animated page changes.
    pub fn set_animate_duration(&mut self, duration: Duration) {
        self.animate_duration = duration;
    }

    /// Hide the control entirely when there is at most one page.
    pub fn set_hides_for_single_page(&mut self, hides: bool) {
        self.hides_for_single_page = hides;
    }

    /// Selected page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Total number of pages.
    pub fn number_of_pages(&self) -> usize {
        self.number_of_pages
    }

    /// Visible slots: the configured window clamped to the page count.
    pub fn display_count(&self) -> usize {
        self.display_count
    }

    /// Layout parameters in use.
    pub fn config(&self) -> &DotConfig {
        &self.config
    }

    /// Color of every dot except the current one.
    pub fn page_indicator_tint_color(&self) -> Color {
        self.page_indicator_tint_color
    }

    /// Color of the current page's dot.
    pub fn current_page_indicator_tint_color(&self) -> Color {
        self.current_page_indicator_tint_color
    }

    /// Duration of animated page changes.
    pub fn animate_duration(&self) -> Duration {
        self.animate_duration
    }

    /// Whether the control hides itself for zero or one page.
    pub fn hides_for_single_page(&self) -> bool {
        self.hides_for_single_page
    }

    // ===== Layout =====

    /// Size hosts should lay the control out with.
    pub fn intrinsic_size(&self) -> Size {
        let item_size = self.config.item_size();
        Size::new(item_size * self.display_count as f64, item_size)
    }

    /// Whether the control currently renders nothing.
    pub fn is_hidden(&self) -> bool {
        self.number_of_pages <= 1 && self.hides_for_single_page
    }

    /// Whether the strip scrolls.
    pub fn is_paging(&self) -> bool {
        self.number_of_pages > self.display_count
    }

    /// Slot geometry of the strip.
    pub fn layout(&self) -> ViewportLayout {
        self.scroll.layout()
    }

    /// Logical viewport offset.
    pub fn offset(&self) -> f64 {
        self.scroll.offset()
    }

    /// Viewport offset currently on screen.
    pub fn presented_offset(&self) -> f64 {
        self.scroll.presented_offset()
    }

    /// Scrollable padding on either side of the content.
    pub fn insets(&self) -> Insets {
        self.scroll.layout().insets()
    }

    /// Pool items in slot order.
    pub fn items(&self) -> impl Iterator<Item = &DotItem> {
        self.window.items()
    }

    /// The pool itself.
    pub fn window(&self) -> &WindowModel {
        &self.window
    }

    // ===== Animation =====

    /// Advance every running transition by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.scroll.tick(dt);
        self.window.tick(dt);
    }

    /// Whether the offset or any dot is still moving.
    pub fn is_animating(&self) -> bool {
        self.scroll.is_animating() || self.window.is_animating()
    }

    /// Re-run the position and size update for the current page.
    pub fn refresh(&mut self, animated: bool) {
        if self.number_of_pages == 0 {
            return;
        }
        self.update_dot(self.current_page, animated);
    }

    // ===== Internals =====

    fn update(&mut self) {
        let was_paging = self.window.mode() == Some(WindowMode::Paging);
        let outcome = self
            .window
            .build(self.current_page, self.number_of_pages, &self.config);
        if outcome == BuildOutcome::Skipped {
            return;
        }
        // A rebuild between two paging layouts leaves the viewport where it is
        let still_paging = self.window.mode() == Some(WindowMode::Paging);
        if !(was_paging && still_paging) {
            self.scroll.reset();
        }
        self.scroll.configure(self.window.layout());
        debug!(
            ?outcome,
            current_page = self.current_page,
            number_of_pages = self.number_of_pages,
            display_count = self.display_count,
            "Page control relaid out"
        );
        if outcome != BuildOutcome::Empty {
            self.update_dot(self.current_page, false);
        }
    }

    fn update_dot(&mut self, current_page: usize, animated: bool) {
        let duration = if animated {
            self.animate_duration
        } else {
            Duration::ZERO
        };

        if self.is_paging() {
            self.scroll
                .update_position(current_page, duration, &mut self.window);
        }
        self.update_dot_color();
        if self.is_paging() {
            let layout = self.scroll.layout();
            let context = SizeContext {
                offset: self.scroll.offset(),
                viewport_width: layout.viewport_width(),
                item_size: layout.item_size,
                number_of_pages: self.number_of_pages,
                current_page,
            };
            self.window.apply_sizes(&context, duration);
        }
    }

    fn update_dot_color(&mut self) {
        self.window.apply_colors(
            self.current_page,
            self.page_indicator_tint_color,
            self.current_page_indicator_tint_color,
        );
    }
}

impl Default for PageControl {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "page_control_tests.rs"]
mod tests;
