//! Geometric primitives for page layout.
//!
//! This module provides the vector helpers used by the border decorator and
//! the text layout engine.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in page space
//! - [`Size`] - Width and height dimensions of a page
//! - [`point_along_angle`], [`angle_between`], [`distance_between`] - Vector helpers
//! - [`inches_to_units`] - Conversion from inches to page units
//!
//! # Coordinate System
//!
//! Coversheet uses the PDF page coordinate system:
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
//! - **Origin**: Bottom-left corner of the page at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases upward
//! - **Units**: [`UNITS_PER_INCH`] page units per inch
//!
//! Angles are expressed in degrees, counterclockwise from the positive x-axis.

/// Page units per inch.
pub const UNITS_PER_INCH: f32 = 72.0;

/// Converts inches to page units.
///
/// # Examples
///
/// ```
/// # use coversheet_core::geometry::inches_to_units;
/// assert_eq!(inches_to_units(0.5), 36.0);
/// assert_eq!(inches_to_units(8.5), 612.0);
/// ```
pub fn inches_to_units(inches: f32) -> f32 {
    inches * UNITS_PER_INCH
}

/// A 2D point representing a position in page coordinate space.
///
/// # Examples
///
/// ```
/// # use coversheet_core::geometry::Point;
/// let point = Point::new(10.0, 20.0).with_y(5.0);
/// assert_eq!(point.x(), 10.0);
/// assert_eq!(point.y(), 5.0);
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

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }
}

/// Represents the dimensions of a page with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Creates a size from dimensions given in inches.
    pub fn from_inches(width: f32, height: f32) -> Self {
        Self::new(inches_to_units(width), inches_to_units(height))
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns true if both dimensions are finite and strictly positive
    pub fn is_positive(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Returns the point reached by moving `distance` units from `origin` along
/// `angle` degrees (counterclockwise from the positive x-axis).
///
/// # Examples
///
/// ```
/// # use coversheet_core::geometry::{Point, point_along_angle};
/// let up = point_along_angle(Point::new(10.0, 10.0), 90.0, 5.0);
/// assert!((up.x() - 10.0).abs() < 1e-4);
/// assert!((up.y() - 15.0).abs() < 1e-4);
/// ```
pub fn point_along_angle(origin: Point, angle: f32, distance: f32) -> Point {
    let radians = angle.to_radians();
    Point::new(
        origin.x + radians.cos() * distance,
        origin.y + radians.sin() * distance,
    )
}

/// Returns the angle in degrees of `atan2(from.y - to.y, from.x - to.x)`.
///
/// The argument order is significant: `angle_between(a, b)` is the heading
/// that leads from `a` toward `b`. Feeding that heading and
/// [`distance_between`] back into [`point_along_angle`] starting at `a`
/// reconstructs `b`.
///
/// # Examples
///
/// ```
/// # use coversheet_core::geometry::{Point, angle_between};
/// let left = Point::new(0.0, 0.0);
/// let right = Point::new(10.0, 0.0);
/// assert_eq!(angle_between(left, right), 0.0);
/// assert!((angle_between(right, left) - 180.0).abs() < 1e-4);
/// ```
pub fn angle_between(to: Point, from: Point) -> f32 {
    (from.y - to.y).atan2(from.x - to.x).to_degrees()
}

/// Euclidean distance between two points.
pub fn distance_between(p1: Point, p2: Point) -> f32 {
    (p2.x - p1.x).hypot(p2.y - p1.y)
}
