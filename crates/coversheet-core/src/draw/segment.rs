//! Straight line segments handed to a rendering surface.

use crate::{
    draw::StrokeDefinition,
    geometry::{Point, distance_between},
};

/// A stroked straight line between two points.
///
/// Segments are produced by layout code and consumed immediately by a
/// [`Surface`](crate::draw::Surface); they carry no identity.
///
/// # Examples
///
/// ```
/// # use coversheet_core::draw::{Segment, StrokeDefinition};
/// # use coversheet_core::geometry::Point;
/// let segment = Segment::new(
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 4.0),
///     StrokeDefinition::default(),
/// );
/// assert_eq!(segment.length(), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    start: Point,
    end: Point,
    stroke: StrokeDefinition,
}

impl Segment {
    /// Creates a segment from `start` to `end` drawn with `stroke`.
    pub fn new(start: Point, end: Point, stroke: StrokeDefinition) -> Self {
        Self { start, end, stroke }
    }

    /// Returns the start point.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Returns the end point.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Returns the stroke used to draw this segment.
    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    /// Returns the Euclidean length of the segment.
    pub fn length(&self) -> f32 {
        distance_between(self.start, self.end)
    }
}
