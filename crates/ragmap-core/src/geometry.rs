//! Geometric primitives for graph layout and positioning.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in scene space
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Ragmap uses the canvas coordinate system of the browser view:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Layout engines center their output on the origin, which is where the
//! browser view places its camera by default.

/// A 2D point representing a position in scene coordinate space.
///
/// # Examples
///
/// ```
/// # use ragmap_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
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

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Multiplies both coordinates by the given factor.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ragmap_core::geometry::Point;
    /// let point = Point::new(10.0, 20.0);
    ///
    /// let halved = point.scale(0.5);
    /// assert_eq!(halved.x(), 5.0);
    /// assert_eq!(halved.y(), 10.0);
    /// ```
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns this point with its length limited to `max_len`.
    ///
    /// Points shorter than `max_len` are returned unchanged.
    pub fn clamp_length(self, max_len: f32) -> Self {
        let len = self.hypot();
        if len > max_len && len > 0.0 {
            self.scale(max_len / len)
        } else {
            self
        }
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates the smallest bounds enclosing all `points`.
    ///
    /// Returns `None` for an empty iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ragmap_core::geometry::{Bounds, Point};
    /// let bounds = Bounds::enclosing([Point::new(-10.0, 0.0), Point::new(30.0, 20.0)]).unwrap();
    /// assert_eq!(bounds.width(), 40.0);
    /// assert_eq!(bounds.center(), Point::new(10.0, 10.0));
    /// ```
    pub fn enclosing(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        points.into_iter().fold(None, |bounds, p| {
            Some(match bounds {
                None => Self {
                    min_x: p.x,
                    min_y: p.y,
                    max_x: p.x,
                    max_y: p.y,
                },
                Some(b) => Self {
                    min_x: b.min_x.min(p.x),
                    min_y: b.min_y.min(p.y),
                    max_x: b.max_x.max(p.x),
                    max_y: b.max_y.max(p.y),
                },
            })
        })
    }

    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

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

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns `true` if the point lies inside or on the edge of the bounds.
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_sub() {
        let p = Point::new(10.0, 5.0).sub_point(Point::new(4.0, 8.0));
        assert_eq!(p, Point::new(6.0, -3.0));
    }

    #[test]
    fn test_point_hypot() {
        assert_eq!(Point::new(3.0, 4.0).hypot(), 5.0);
    }

    #[test]
    fn test_clamp_length_limits_long_vectors() {
        let p = Point::new(30.0, 40.0).clamp_length(5.0);
        assert!((p.hypot() - 5.0).abs() < 1e-4);
        assert!((p.x() - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_clamp_length_keeps_short_vectors() {
        let p = Point::new(1.0, 1.0);
        assert_eq!(p.clamp_length(5.0), p);
        assert_eq!(Point::default().clamp_length(5.0), Point::default());
    }

    #[test]
    fn test_bounds_enclosing_empty() {
        assert!(Bounds::enclosing(std::iter::empty()).is_none());
    }

    #[test]
    fn test_bounds_enclosing_single_point() {
        let b = Bounds::enclosing([Point::new(2.0, 3.0)]).unwrap();
        assert_eq!(b.width(), 0.0);
        assert_eq!(b.height(), 0.0);
        assert_eq!(b.center(), Point::new(2.0, 3.0));
    }
}
