//! Geometric primitives for network layout.
//!
//! This module provides the world-space types the layout routine produces
//! and drawing surfaces consume.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in world space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned rectangle given by its coordinate ranges
//!
//! # Coordinate System
//!
//! World space follows the plotting convention, not the screen one:
//!
//! ```text
//!    +Y
//!     ▲
//!     │
//!     │
//!     │
//!   (0,0) ────────► +X
//! ```
//!
//! - **X-axis**: Increases rightward. Layer columns are centered on `x = 0`.
//! - **Y-axis**: Increases upward. Node `0` of every layer is the lowest one.
//!
//! Surfaces that render in screen space (such as SVG) are responsible for
//! flipping the Y axis.

/// A 2D point in world space.
///
/// # Examples
///
/// ```
/// # use netdraw_core::geometry::Point;
/// let point = Point::new(-0.5, 0.2);
///
/// assert_eq!(point.x(), -0.5);
/// assert_eq!(point.flip_y(), Point::new(-0.5, -0.2));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns the same point mirrored across the x-axis.
    pub fn flip_y(self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Multiplies both dimension by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// An axis-aligned rectangle defined by its horizontal and vertical ranges.
///
/// Drawing surfaces use it as their visible coordinate bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from an x-range and a y-range.
    ///
    /// # Examples
    ///
    /// ```
    /// # use netdraw_core::geometry::Bounds;
    /// let bounds = Bounds::from_ranges((-1.0, 1.0), (-0.5, 2.5));
    /// assert_eq!(bounds.width(), 2.0);
    /// assert_eq!(bounds.height(), 3.0);
    /// ```
    pub fn from_ranges(x_range: (f32, f32), y_range: (f32, f32)) -> Self {
        Self {
            min_x: x_range.0,
            max_x: x_range.1,
            min_y: y_range.0,
            max_y: y_range.1,
        }
    }

    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Returns true if the point lies inside or on the edge of the bounds.
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Merges two bounds to create a larger bounds that contains both.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_flip_y() {
        let flipped = Point::new(1.0, 2.0).flip_y();
        assert_eq!(flipped, Point::new(1.0, -2.0));
    }

    #[test]
    fn test_size_scale() {
        let size = Size::new(1.5, 0.25).scale(400.0);
        assert_approx_eq!(f32, size.width(), 600.0);
        assert_approx_eq!(f32, size.height(), 100.0);
    }

    #[test]
    fn test_bounds_from_ranges() {
        let bounds = Bounds::from_ranges((-0.75, 0.75), (-0.6, 1.0));

        assert_eq!(bounds.min_x(), -0.75);
        assert_eq!(bounds.max_x(), 0.75);
        assert_eq!(bounds.min_y(), -0.6);
        assert_eq!(bounds.max_y(), 1.0);
        assert_approx_eq!(f32, bounds.width(), 1.5);
        assert_approx_eq!(f32, bounds.height(), 1.6);
    }

    #[test]
    fn test_bounds_new_from_center() {
        let center = Point::new(50.0, 60.0);
        let bounds = Bounds::new_from_center(center, Size::new(20.0, 30.0));

        assert_eq!(bounds.min_x(), 40.0);
        assert_eq!(bounds.min_y(), 45.0);
        assert_eq!(bounds.max_x(), 60.0);
        assert_eq!(bounds.max_y(), 75.0);
        assert_eq!(bounds.to_size(), Size::new(20.0, 30.0));
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = Bounds::from_ranges((-1.0, 1.0), (0.0, 2.0));

        assert!(bounds.contains(Point::new(0.0, 1.0)));
        assert!(bounds.contains(Point::new(-1.0, 0.0)));
        assert!(!bounds.contains(Point::new(1.5, 1.0)));
        assert!(!bounds.contains(Point::new(0.0, -0.1)));
    }

    #[test]
    fn test_bounds_merge() {
        let a = Bounds::from_ranges((0.0, 1.0), (0.0, 1.0));
        let b = Bounds::from_ranges((-2.0, 0.5), (0.5, 3.0));

        let merged = a.merge(&b);
        assert_eq!(merged, Bounds::from_ranges((-2.0, 1.0), (0.0, 3.0)));
    }
}
