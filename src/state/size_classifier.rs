//! Edge-proximity size classification.
//!
//! A pure function of the viewport and an item's slot. Nothing is diffed or
//! cached: every update recomputes every state from scratch.

use crate::model::SizeState;

/// Everything the classifier needs to know about the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeContext {
    /// Logical (target) scroll offset.
    pub offset: f64,
    /// Visible width.
    pub viewport_width: f64,
    /// Slot pitch.
    pub item_size: f64,
    /// Total number of real pages.
    pub number_of_pages: usize,
    /// Highlighted page.
    pub current_page: usize,
}

impl SizeContext {
    /// Classify the dot occupying logical slot `index`.
    ///
    /// Rules are checked in order and the first match wins.
    pub fn classify(&self, index: isize) -> SizeState {
        let slot_start = index as f64 * self.item_size;
        let slot_end = slot_start + self.item_size;
        let visible_end = self.offset + self.viewport_width;

        if index == self.current_page as isize {
            SizeState::Normal
        } else if index < 0 || index > self.number_of_pages as isize - 1 {
            SizeState::None
        } else if slot_start <= self.offset || slot_end >= visible_end {
            SizeState::Small
        } else if slot_start <= self.offset + self.item_size
            || slot_end >= visible_end - self.item_size
        {
            SizeState::Medium
        } else {
            SizeState::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Seven visible slots of width 10 starting at slot 6.
    fn context(current_page: usize) -> SizeContext {
        SizeContext {
            offset: 60.0,
            viewport_width: 70.0,
            item_size: 10.0,
            number_of_pages: 20,
            current_page,
        }
    }

    #[test]
    fn current_page_is_always_normal() {
        // Slot 6 sits on the left edge but is the current page.
        assert_eq!(context(6).classify(6), SizeState::Normal);
    }

    #[test]
    fn negative_slots_are_hidden() {
        assert_eq!(context(10).classify(-1), SizeState::None);
    }

    #[test]
    fn slots_past_the_last_page_are_hidden() {
        assert_eq!(context(10).classify(20), SizeState::None);
        assert_eq!(context(10).classify(19), SizeState::Small);
    }

    #[test]
    fn visible_window_reads_small_medium_normal_medium_small() {
        let ctx = context(10);
        let states: Vec<SizeState> = (6..13).map(|i| ctx.classify(i)).collect();
        assert_eq!(
            states,
            vec![
                SizeState::Small,
                SizeState::Medium,
                SizeState::Normal,
                SizeState::Normal,
                SizeState::Normal,
                SizeState::Medium,
                SizeState::Small,
            ]
        );
    }

    #[test]
    fn overscan_slots_beyond_the_edges_are_small() {
        let ctx = context(10);
        assert_eq!(ctx.classify(5), SizeState::Small);
        assert_eq!(ctx.classify(13), SizeState::Small);
    }

    #[test]
    fn current_page_precedes_out_of_range_rule() {
        // A stale current page past the end still wins rule one.
        let ctx = SizeContext {
            number_of_pages: 5,
            current_page: 7,
            ..context(0)
        };
        assert_eq!(ctx.classify(7), SizeState::Normal);
        assert_eq!(ctx.classify(6), SizeState::None);
    }
}
