//! The rendering surface abstraction.
//!
//! Layout code never talks to a document format directly. It emits line and
//! text commands to a [`Surface`], which is expected to apply them in call
//! order.
//!
//! [`RecordingSurface`] keeps the commands in memory, which is what tests and
//! callers that post-process the command list use.

use crate::{
    draw::{Segment, TextDefinition},
    geometry::{Point, Size},
};

/// A fixed-size page that accepts drawing commands.
pub trait Surface {
    /// Returns the page dimensions in page units.
    fn page_size(&self) -> Size;

    /// Draws a stroked line segment.
    fn draw_line(&mut self, segment: &Segment);

    /// Draws a single line of text with its baseline origin at `origin`.
    fn draw_text(&mut self, content: &str, origin: Point, definition: &TextDefinition);
}

/// A command received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line(Segment),
    Text {
        content: String,
        origin: Point,
        definition: TextDefinition,
    },
}

/// A [`Surface`] that records every command it receives.
///
/// # Examples
///
/// ```
/// # use coversheet_core::draw::{RecordingSurface, Segment, StrokeDefinition, Surface};
/// # use coversheet_core::geometry::{Point, Size};
/// let mut surface = RecordingSurface::new(Size::from_inches(8.5, 11.0));
/// surface.draw_line(&Segment::new(
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     StrokeDefinition::default(),
/// ));
/// assert_eq!(surface.lines().count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    page_size: Size,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Creates an empty recording surface of the given page size.
    pub fn new(page_size: Size) -> Self {
        Self {
            page_size,
            commands: Vec::new(),
        }
    }

    /// Returns all recorded commands in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Consumes the surface, returning the recorded commands.
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Iterates over recorded line segments.
    pub fn lines(&self) -> impl Iterator<Item = &Segment> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line(segment) => Some(segment),
            DrawCommand::Text { .. } => None,
        })
    }

    /// Iterates over recorded text runs as `(content, origin)` pairs.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text {
                content, origin, ..
            } => Some((content.as_str(), *origin)),
            DrawCommand::Line(_) => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn page_size(&self) -> Size {
        self.page_size
    }

    fn draw_line(&mut self, segment: &Segment) {
        self.commands.push(DrawCommand::Line(segment.clone()));
    }

    fn draw_text(&mut self, content: &str, origin: Point, definition: &TextDefinition) {
        self.commands.push(DrawCommand::Text {
            content: content.to_string(),
            origin,
            definition: definition.clone(),
        });
    }
}
