//! Decorated page border.
//!
//! The border has two layers:
//!
//! - a **thin border**: a closed rectangle inset by [`BorderConfig::thin_margin`];
//! - a **thick border**: a heavier rectangle inset by
//!   [`BorderConfig::thick_margin`], broken into four long edges and four
//!   square corner flourishes.
//!
//! Each flourish is traced by a turtle walk over [`CORNER_FLOURISH`]. The
//! square it draws is centered on the thin border's corner, which is why the
//! thick margin is always the thin margin minus half a step.
//!
//! ```text
//!        ┌───┐
//!   ─────┼─┐ │
//!        └─┼─┘
//!          │
//!          │
//! ```
//!
//! # Example
//!
//! ```
//! # use coversheet::border::{BorderConfig, BorderDecorator};
//! # use coversheet_core::geometry::Size;
//! let decorator = BorderDecorator::new(BorderConfig::default());
//! let segments = decorator.segments(Size::from_inches(8.5, 11.0)).unwrap();
//! assert_eq!(segments.len(), 4 + 28);
//! ```

use log::{debug, trace};
use serde::Deserialize;

use coversheet_core::{
    color::Color,
    draw::{Segment, StrokeCap, StrokeDefinition, Surface},
    geometry::{
        Point, Size, angle_between, distance_between, inches_to_units, point_along_angle,
    },
};

use crate::error::LayoutError;

/// A single turn-then-advance instruction of a turtle walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Movement {
    turn: f32,
    steps: f32,
}

impl Movement {
    /// Turns by `turn` degrees, then advances `steps` step distances.
    pub const fn new(turn: f32, steps: f32) -> Self {
        Self { turn, steps }
    }

    pub fn turn(self) -> f32 {
        self.turn
    }

    pub fn steps(self) -> f32 {
        self.steps
    }
}

/// Moves tracing one square corner flourish.
pub const CORNER_FLOURISH: [Movement; 6] = [
    Movement::new(-90.0, 1.0),
    Movement::new(90.0, 2.0),
    Movement::new(90.0, 1.0),
    Movement::new(90.0, 1.0),
    Movement::new(90.0, 2.0),
    Movement::new(90.0, 1.0),
];

/// Position and heading of a turtle walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Turtle {
    position: Point,
    heading: f32,
}

impl Turtle {
    pub fn new(position: Point, heading: f32) -> Self {
        Self { position, heading }
    }

    pub fn position(self) -> Point {
        self.position
    }

    /// Heading in degrees, counterclockwise from the positive x-axis.
    pub fn heading(self) -> f32 {
        self.heading
    }

    /// Applies one movement, returning the moved turtle and the path it traced.
    pub fn advance(self, movement: Movement, step_distance: f32) -> (Self, (Point, Point)) {
        let heading = self.heading + movement.turn;
        let position = point_along_angle(self.position, heading, movement.steps * step_distance);
        (Self { position, heading }, (self.position, position))
    }
}

/// Folds `movements` over `start`, returning the final turtle and every traced path.
pub fn walk(
    start: Turtle,
    movements: &[Movement],
    step_distance: f32,
) -> (Turtle, Vec<(Point, Point)>) {
    movements.iter().fold(
        (start, Vec::with_capacity(movements.len())),
        |(turtle, mut paths), movement| {
            let (turtle, path) = turtle.advance(*movement, step_distance);
            paths.push(path);
            (turtle, paths)
        },
    )
}

/// Border settings in page units.
///
/// The thick-border margin is derived from the thin margin and the step
/// distance, never configured on its own.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BorderConfig {
    /// Distance between the thin border and the page edge.
    thin_margin: f32,

    /// Length unit of a corner flourish move.
    step_distance: f32,

    /// Thickness of the thin border.
    line_thickness: f32,

    /// Thickness of the thick border and its flourishes.
    decoration_thickness: f32,

    /// End cap of every border line.
    line_cap: StrokeCap,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            thin_margin: inches_to_units(0.75),
            step_distance: 18.0,
            line_thickness: 2.0,
            decoration_thickness: 4.0,
            line_cap: StrokeCap::Round,
        }
    }
}

impl BorderConfig {
    pub fn new(
        thin_margin: f32,
        step_distance: f32,
        line_thickness: f32,
        decoration_thickness: f32,
    ) -> Self {
        Self {
            thin_margin,
            step_distance,
            line_thickness,
            decoration_thickness,
            line_cap: StrokeCap::Round,
        }
    }

    /// Sets the end cap of every border line.
    pub fn with_line_cap(mut self, line_cap: StrokeCap) -> Self {
        self.line_cap = line_cap;
        self
    }

    pub fn thin_margin(&self) -> f32 {
        self.thin_margin
    }

    /// Distance between the thick border and the page edge.
    pub fn thick_margin(&self) -> f32 {
        self.thin_margin - self.step_distance / 2.0
    }

    pub fn step_distance(&self) -> f32 {
        self.step_distance
    }

    pub fn line_thickness(&self) -> f32 {
        self.line_thickness
    }

    pub fn decoration_thickness(&self) -> f32 {
        self.decoration_thickness
    }

    pub fn line_cap(&self) -> StrokeCap {
        self.line_cap
    }
}

/// Generates the segments of a decorated border for a page.
#[derive(Debug, Clone, Default)]
pub struct BorderDecorator {
    config: BorderConfig,
    color: Color,
}

impl BorderDecorator {
    pub fn new(config: BorderConfig) -> Self {
        Self {
            config,
            color: Color::default(),
        }
    }

    /// Sets the line color of both border layers.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn config(&self) -> &BorderConfig {
        &self.config
    }

    /// Returns the thin border: four segments closing the rectangle.
    pub fn thin_border(&self, page: Size) -> Vec<Segment> {
        let stroke = StrokeDefinition::new(self.color, self.config.line_thickness())
            .with_cap(self.config.line_cap());
        let corners = corners(page, self.config.thin_margin());

        cyclic_pairs(&corners)
            .map(|(start, end)| Segment::new(start, end, stroke.clone()))
            .collect()
    }

    /// Returns the thick border: for each corner, the long edge leading away
    /// from it followed by the six flourish segments at the next corner.
    ///
    /// # Errors
    ///
    /// See [`BorderDecorator::validate`].
    pub fn thick_border(&self, page: Size) -> Result<Vec<Segment>, LayoutError> {
        self.validate(page)?;

        let step = self.config.step_distance();
        let stroke = StrokeDefinition::new(self.color, self.config.decoration_thickness())
            .with_cap(self.config.line_cap());
        let corners = corners(page, self.config.thick_margin());

        let mut segments = Vec::with_capacity(corners.len() * (1 + CORNER_FLOURISH.len()));
        for (corner, next_corner) in cyclic_pairs(&corners) {
            let angle = angle_between(corner, next_corner);
            let edge = distance_between(corner, next_corner);

            // The edge leaves room for a flourish at both ends
            let edge_start = point_along_angle(corner, angle, step * 2.0);
            let edge_end = point_along_angle(corner, angle, edge - step * 2.0);
            segments.push(Segment::new(edge_start, edge_end, stroke.clone()));

            let (turtle, paths) = walk(Turtle::new(edge_end, angle), &CORNER_FLOURISH, step);
            trace!(
                corner:? = next_corner,
                end:? = turtle.position();
                "Traced corner flourish"
            );
            segments.extend(
                paths
                    .into_iter()
                    .map(|(start, end)| Segment::new(start, end, stroke.clone())),
            );
        }

        Ok(segments)
    }

    /// Returns the thin border followed by the thick border.
    ///
    /// # Errors
    ///
    /// See [`BorderDecorator::validate`].
    pub fn segments(&self, page: Size) -> Result<Vec<Segment>, LayoutError> {
        let mut segments = self.thin_border(page);
        segments.extend(self.thick_border(page)?);
        Ok(segments)
    }

    /// Draws the full border onto `surface`, returning the number of segments drawn.
    ///
    /// Nothing is drawn if the configuration is rejected.
    ///
    /// # Errors
    ///
    /// See [`BorderDecorator::validate`].
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<usize, LayoutError> {
        let page = surface.page_size();
        let segments = self.segments(page)?;
        for segment in &segments {
            surface.draw_line(segment);
        }

        debug!(segments = segments.len(); "Border drawn");
        Ok(segments.len())
    }

    /// Checks that the border fits on `page`.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::InvalidBorder`] if the page size, step distance or a
    ///   thickness is not a finite positive number, or if the thin margin is
    ///   not finite or would put the thick border off the page.
    /// - [`LayoutError::DegenerateBorder`] if a thick-border edge is shorter
    ///   than four step distances, leaving no room for a flourish at each end.
    pub fn validate(&self, page: Size) -> Result<(), LayoutError> {
        if !page.is_positive() {
            return Err(LayoutError::InvalidBorder(format!(
                "page size must be positive, got {}x{}",
                page.width(),
                page.height()
            )));
        }

        for (name, value) in [
            ("step distance", self.config.step_distance()),
            ("line thickness", self.config.line_thickness()),
            ("decoration thickness", self.config.decoration_thickness()),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidBorder(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let thick_margin = self.config.thick_margin();
        if !thick_margin.is_finite() || thick_margin < 0.0 {
            return Err(LayoutError::InvalidBorder(format!(
                "thin margin must be at least half a step distance, got {}",
                self.config.thin_margin()
            )));
        }

        let edge = (page.width() - thick_margin * 2.0).min(page.height() - thick_margin * 2.0);
        let minimum = self.config.step_distance() * 4.0;
        if edge < minimum {
            return Err(LayoutError::DegenerateBorder { edge, minimum });
        }

        Ok(())
    }
}

/// Rectangle corners inset by `margin`: top-left, top-right, bottom-right, bottom-left.
fn corners(page: Size, margin: f32) -> [Point; 4] {
    let left = margin;
    let right = page.width() - margin;
    let top = page.height() - margin;
    let bottom = margin;

    [
        Point::new(left, top),
        Point::new(right, top),
        Point::new(right, bottom),
        Point::new(left, bottom),
    ]
}

/// Pairs each point with its successor, wrapping the last back to the first.
fn cyclic_pairs(points: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(start, end)| (*start, *end))
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use coversheet_core::draw::RecordingSurface;

    use super::*;

    const EPSILON: f32 = 1e-3;

    fn letter() -> Size {
        Size::from_inches(8.5, 11.0)
    }

    fn assert_point_eq(actual: Point, expected: Point) {
        assert_approx_eq!(f32, actual.x(), expected.x(), epsilon = EPSILON);
        assert_approx_eq!(f32, actual.y(), expected.y(), epsilon = EPSILON);
    }

    #[test]
    fn test_default_config_values() {
        let config = BorderConfig::default();
        assert_approx_eq!(f32, config.thin_margin(), 54.0);
        assert_approx_eq!(f32, config.thick_margin(), 45.0);
        assert_approx_eq!(f32, config.step_distance(), 18.0);
        assert_approx_eq!(f32, config.line_thickness(), 2.0);
        assert_approx_eq!(f32, config.decoration_thickness(), 4.0);
    }

    #[test]
    fn test_movement_accessors() {
        let movement = CORNER_FLOURISH[1];
        assert_approx_eq!(f32, movement.turn(), 90.0);
        assert_approx_eq!(f32, movement.steps(), 2.0);
    }

    #[test]
    fn test_thin_border_is_closed_loop() {
        let decorator = BorderDecorator::default();
        let segments = decorator.thin_border(letter());

        assert_eq!(segments.len(), 4);
        for (segment, next) in segments.iter().zip(segments.iter().cycle().skip(1)) {
            assert_eq!(segment.end(), next.start());
            assert_approx_eq!(f32, segment.stroke().width(), 2.0);
            assert_eq!(segment.stroke().cap(), StrokeCap::Round);
        }

        assert_eq!(segments[0].start(), Point::new(54.0, 738.0));
        assert_eq!(segments[0].end(), Point::new(558.0, 738.0));
        assert_eq!(segments[1].end(), Point::new(558.0, 54.0));
        assert_eq!(segments[2].end(), Point::new(54.0, 54.0));
        assert_eq!(segments[3].end(), Point::new(54.0, 738.0));
    }

    #[test]
    fn test_thick_border_segment_count() {
        let decorator = BorderDecorator::default();
        let segments = decorator.thick_border(letter()).unwrap();

        assert_eq!(segments.len(), 4 + 4 * 6);
        for segment in &segments {
            assert_approx_eq!(f32, segment.stroke().width(), 4.0);
            assert_eq!(segment.stroke().cap(), StrokeCap::Round);
        }
    }

    #[test]
    fn test_thick_border_top_edge_and_flourish() {
        let decorator = BorderDecorator::default();
        let segments = decorator.thick_border(letter()).unwrap();

        // Thick corners sit at 45 units from each page edge
        let top_edge = &segments[0];
        assert_point_eq(top_edge.start(), Point::new(81.0, 747.0));
        assert_point_eq(top_edge.end(), Point::new(531.0, 747.0));

        let expected = [
            Point::new(531.0, 729.0),
            Point::new(567.0, 729.0),
            Point::new(567.0, 747.0),
            Point::new(549.0, 747.0),
            Point::new(549.0, 711.0),
            Point::new(567.0, 711.0),
        ];
        let mut previous = top_edge.end();
        for (segment, point) in segments[1..7].iter().zip(expected) {
            assert_point_eq(segment.start(), previous);
            assert_point_eq(segment.end(), point);
            previous = segment.end();
        }
    }

    #[test]
    fn test_flourish_ends_where_next_edge_starts() {
        let decorator = BorderDecorator::default();
        let segments = decorator.thick_border(letter()).unwrap();

        for corner in 0..4 {
            let flourish_end = segments[corner * 7 + 6].end();
            let next_edge_start = segments[((corner + 1) % 4) * 7].start();
            assert_point_eq(flourish_end, next_edge_start);
        }
    }

    #[test]
    fn test_flourish_straddles_thin_corner() {
        let decorator = BorderDecorator::default();
        let page = letter();
        let segments = decorator.thick_border(page).unwrap();
        let thin_corners = corners(page, decorator.config().thin_margin());

        for (corner, thin_corner) in (0..4).zip(thin_corners.iter().cycle().skip(1)) {
            let flourish = &segments[corner * 7 + 1..corner * 7 + 7];
            let (min_x, max_x, min_y, max_y) = flourish.iter().fold(
                (f32::MAX, f32::MIN, f32::MAX, f32::MIN),
                |(min_x, max_x, min_y, max_y), segment| {
                    (
                        min_x.min(segment.start().x()).min(segment.end().x()),
                        max_x.max(segment.start().x()).max(segment.end().x()),
                        min_y.min(segment.start().y()).min(segment.end().y()),
                        max_y.max(segment.start().y()).max(segment.end().y()),
                    )
                },
            );

            assert!(thin_corner.x() > min_x && thin_corner.x() < max_x);
            assert!(thin_corner.y() > min_y && thin_corner.y() < max_y);
        }
    }

    #[test]
    fn test_segments_thin_then_thick() {
        let decorator = BorderDecorator::default();
        let segments = decorator.segments(letter()).unwrap();

        assert_eq!(segments.len(), 32);
        assert!(segments[..4].iter().all(|s| s.stroke().width() == 2.0));
        assert!(segments[4..].iter().all(|s| s.stroke().width() == 4.0));
    }

    #[test]
    fn test_walk_returns_final_turtle() {
        let start = Turtle::new(Point::new(0.0, 0.0), 0.0);
        let (end, paths) = walk(start, &CORNER_FLOURISH, 10.0);

        assert_eq!(paths.len(), 6);
        assert_point_eq(end.position(), Point::new(20.0, -20.0));
        // Five quarter turns left and one right leave a net turn of 360 degrees
        assert_approx_eq!(f32, end.heading(), 360.0);
        assert_eq!(paths[0].0, start.position());
    }

    #[test]
    fn test_walk_with_no_moves_is_identity() {
        let start = Turtle::new(Point::new(3.0, 4.0), 45.0);
        let (end, paths) = walk(start, &[], 18.0);
        assert_eq!(end, start);
        assert!(paths.is_empty());
    }

    #[test]
    fn test_draw_emits_all_segments_in_order() {
        let decorator = BorderDecorator::default();
        let mut surface = RecordingSurface::new(letter());

        let drawn = decorator.draw(&mut surface).unwrap();

        assert_eq!(drawn, 32);
        let recorded: Vec<_> = surface.lines().cloned().collect();
        assert_eq!(recorded, decorator.segments(letter()).unwrap());
    }

    #[test]
    fn test_with_color_applies_to_all_segments() {
        let red = Color::new("red").unwrap();
        let decorator = BorderDecorator::default().with_color(red);
        let segments = decorator.segments(letter()).unwrap();
        assert!(segments.iter().all(|s| s.stroke().color() == red));
    }

    #[test]
    fn test_degenerate_border_is_rejected() {
        let decorator = BorderDecorator::default();
        // Thick edge is 150 - 2 * 45 = 60 units, short of 4 * 18
        let page = Size::new(150.0, 792.0);
        let err = decorator.thick_border(page).unwrap_err();

        match err {
            LayoutError::DegenerateBorder { edge, minimum } => {
                assert_approx_eq!(f32, edge, 60.0);
                assert_approx_eq!(f32, minimum, 72.0);
            }
            other => panic!("Expected DegenerateBorder, got {other:?}"),
        }
    }

    #[test]
    fn test_minimum_edge_is_accepted() {
        let decorator = BorderDecorator::default();
        // Thick edge of exactly 4 steps leaves a zero-length long edge
        let page = Size::new(90.0 + 72.0, 792.0);
        let segments = decorator.thick_border(page).unwrap();
        assert_approx_eq!(f32, segments[0].length(), 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_draw_rejected_border_draws_nothing() {
        let decorator = BorderDecorator::default();
        let mut surface = RecordingSurface::new(Size::new(100.0, 100.0));

        assert!(decorator.draw(&mut surface).is_err());
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_invalid_page_and_step_are_rejected() {
        let decorator = BorderDecorator::default();
        assert!(matches!(
            decorator.validate(Size::new(0.0, 792.0)),
            Err(LayoutError::InvalidBorder(_))
        ));

        let zero_step = BorderDecorator::new(BorderConfig::new(54.0, 0.0, 2.0, 4.0));
        assert!(matches!(
            zero_step.validate(letter()),
            Err(LayoutError::InvalidBorder(message)) if message.contains("step distance")
        ));

        let negative_thickness = BorderDecorator::new(BorderConfig::new(54.0, 18.0, -1.0, 4.0));
        assert!(matches!(
            negative_thickness.validate(letter()),
            Err(LayoutError::InvalidBorder(message)) if message.contains("line thickness")
        ));
    }

    #[test]
    fn test_non_finite_thin_margin_is_rejected() {
        let config: BorderConfig = toml::from_str("thin_margin = nan").unwrap();
        let decorator = BorderDecorator::new(config);

        assert!(matches!(
            decorator.validate(letter()),
            Err(LayoutError::InvalidBorder(message)) if message.contains("thin margin")
        ));
        assert!(decorator.segments(letter()).is_err());

        let infinite = BorderDecorator::new(BorderConfig::new(f32::INFINITY, 18.0, 2.0, 4.0));
        assert!(infinite.validate(letter()).is_err());
    }

    #[test]
    fn test_thick_border_off_page_is_rejected() {
        // Half a step is 9 units, more than the 5 unit thin margin
        let decorator = BorderDecorator::new(BorderConfig::new(5.0, 18.0, 2.0, 4.0));
        assert!(matches!(
            decorator.validate(letter()),
            Err(LayoutError::InvalidBorder(message)) if message.contains("thin margin")
        ));
    }

    #[test]
    fn test_configured_line_cap_applies_to_all_segments() {
        let config: BorderConfig = toml::from_str("line_cap = \"square\"").unwrap();
        let segments = BorderDecorator::new(config).segments(letter()).unwrap();

        assert_eq!(segments.len(), 32);
        assert!(segments.iter().all(|s| s.stroke().cap() == StrokeCap::Square));
    }
}
