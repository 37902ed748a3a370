//! Terminal renderer for [`PageControl`].

use super::styles::{ColorConfig, DotGlyph};
use crate::state::PageControl;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Terminal columns per slot: one for the dot, one for the gap.
pub const CELLS_PER_SLOT: u16 = 2;

/// Draws the visible part of a [`PageControl`] strip.
///
/// The strip is centered in the area, one row high, and clipped to the
/// control's viewport. Positions and glyphs use presented values, so the
/// widget shows animations in progress when the control is ticked between
/// frames.
///
/// # Examples
///
/// ```rust
/// use pagedots::state::PageControl;
/// use pagedots::view::PageIndicator;
/// use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
///
/// let mut control = PageControl::new();
/// control.set_number_of_pages(3);
///
/// let area = Rect::new(0, 0, 6, 1);
/// let mut buf = Buffer::empty(area);
/// PageIndicator::new(&control).render(area, &mut buf);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PageIndicator<'a> {
    control: &'a PageControl,
    colors: ColorConfig,
}

impl<'a> PageIndicator<'a> {
    /// Create a renderer for `control`, honouring `NO_COLOR`.
    pub fn new(control: &'a PageControl) -> Self {
        Self {
            control,
            colors: ColorConfig::default(),
        }
    }

    /// Override color handling.
    pub fn colors(mut self, colors: ColorConfig) -> Self {
        self.colors = colors;
        self
    }

    /// Width in cells the strip needs.
    pub fn desired_width(&self) -> u16 {
        let cells = self.control.display_count() * usize::from(CELLS_PER_SLOT);
        u16::try_from(cells).unwrap_or(u16::MAX)
    }
}

impl Widget for PageIndicator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let control = self.control;
        if control.is_hidden() || area.is_empty() || control.number_of_pages() == 0 {
            return;
        }

        let strip_width = self.desired_width().min(area.width);
        let left = area.x + (area.width - strip_width) / 2;
        let y = area.y + area.height / 2;
        let item_size = control.layout().item_size;
        if item_size <= 0.0 {
            return;
        }
        let offset = control.presented_offset();

        for item in control.items() {
            let metrics = item.metrics();
            let dot = item.dot_frame();
            let Some(symbol) = DotGlyph::for_diameter(dot.size.width, &metrics).symbol() else {
                continue;
            };

            let slots_from_edge = (item.frame().min_x() - offset) / item_size;
            let column = (slots_from_edge * f64::from(CELLS_PER_SLOT)).round();
            if column < 0.0 || column >= f64::from(strip_width) {
                continue;
            }

            let is_current = item.index() == control.current_page() as isize;
            let style = self.colors.dot_style(item.color(), is_current);
            let x = left + column as u16;
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(symbol).set_style(style);
            }
        }
    }
}

#[cfg(test)]
#[path = "page_indicator_tests.rs"]
mod tests;
