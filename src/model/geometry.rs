//! Plain geometry value types in abstract layout units.
//!
//! The core never knows what a unit is. The terminal renderer maps one slot
//! (`item_size` units) to a fixed number of cells.

/// Width and height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Create a new size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Square of side `side`.
    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }
}

/// Axis-aligned rectangle with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Extent of the frame.
    pub size: Size,
}

impl Frame {
    /// Create a new frame.
    pub fn new(x: f64, y: f64, size: Size) -> Self {
        Self { x, y, size }
    }

    /// Left edge.
    pub fn min_x(&self) -> f64 {
        self.x
    }

    /// Right edge.
    pub fn max_x(&self) -> f64 {
        self.x + self.size.width
    }

    /// Horizontal center.
    pub fn mid_x(&self) -> f64 {
        self.x + self.size.width / 2.0
    }

    /// Vertical center.
    pub fn mid_y(&self) -> f64 {
        self.y + self.size.height / 2.0
    }
}

/// Horizontal insets around the scrollable content.
///
/// Only the horizontal axis scrolls, so top and bottom are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    /// Extra scrollable space before the first slot.
    pub left: f64,
    /// Extra scrollable space after the last slot.
    pub right: f64,
}

impl Insets {
    /// No insets.
    pub const ZERO: Self = Self {
        left: 0.0,
        right: 0.0,
    };

    /// Equal insets on both sides.
    pub fn horizontal(inset: f64) -> Self {
        Self {
            left: inset,
            right: inset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_edges_follow_origin_and_size() {
        let frame = Frame::new(20.0, 0.0, Size::square(10.0));
        assert_eq!(frame.min_x(), 20.0);
        assert_eq!(frame.max_x(), 30.0);
        assert_eq!(frame.mid_x(), 25.0);
        assert_eq!(frame.mid_y(), 5.0);
    }

    #[test]
    fn negative_origin_is_allowed() {
        let frame = Frame::new(-20.0, 0.0, Size::square(10.0));
        assert_eq!(frame.max_x(), -10.0);
    }

    #[test]
    fn horizontal_insets_are_symmetric() {
        let insets = Insets::horizontal(20.0);
        assert_eq!(insets.left, insets.right);
        assert_eq!(Insets::default(), Insets::ZERO);
    }
}
