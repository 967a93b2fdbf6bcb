//! Logical geometry used to describe track frames and page placement.
//!
//! All values are `f32` logical units supplied by the host's layout pass.
//! Origin is the top-left corner, X grows to the right and Y grows downward.
//! Offsets along a track may be negative while a track is being overscrolled.

/// A 2D position in logical units.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A 2D size in logical units.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Size {
    /// Extent along the X axis.
    pub width: f32,
    /// Extent along the Y axis.
    pub height: f32,
}

impl Size {
    /// An empty size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns `true` when both dimensions are finite and non-negative.
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}

/// An axis-aligned rectangle described by its origin and size.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Width and height.
    pub size: Size,
}

impl Rect {
    /// Creates a rectangle from its components.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Left edge.
    pub fn min_x(&self) -> f32 {
        self.origin.x
    }
}

/// Insets applied around the scrollable content of a track.
///
/// Only the horizontal edges are used by the tab track, but the full set is
/// kept so hosts can forward it verbatim to their scroll containers.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct EdgeInsets {
    /// Inset above the content.
    pub top: f32,
    /// Inset before the first item.
    pub left: f32,
    /// Inset below the content.
    pub bottom: f32,
    /// Inset after the last item.
    pub right: f32,
}

impl EdgeInsets {
    /// No insets.
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    /// Creates insets that only affect the horizontal edges.
    pub const fn horizontal(left: f32, right: f32) -> Self {
        Self {
            top: 0.0,
            left,
            bottom: 0.0,
            right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_new_splits_origin_and_size() {
        let rect = Rect::new(10.0, 20.0, 100.0, 40.0);
        assert_eq!(rect.origin, Point::new(10.0, 20.0));
        assert_eq!(rect.size, Size::new(100.0, 40.0));
        assert_eq!(rect.min_x(), 10.0);
    }

    #[test]
    fn size_validity() {
        assert!(Size::new(320.0, 480.0).is_valid());
        assert!(Size::ZERO.is_valid());
        assert!(!Size::new(-1.0, 10.0).is_valid());
        assert!(!Size::new(f32::NAN, 10.0).is_valid());
        assert!(!Size::new(10.0, f32::INFINITY).is_valid());
    }
}
