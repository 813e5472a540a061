//! Stroke definitions for border lines.
//!
//! # Overview
//!
//! Exported types:
//! - [`StrokeDefinition`]: Color, width and cap of a line
//! - [`StrokeCap`]: How line endpoints are rendered (butt, round, square)
//! - [`apply_stroke!`](crate::apply_stroke!): Macro for applying stroke attributes to SVG elements
//!
//! # Quick Start
//!
//! ```
//! use coversheet_core::draw::{StrokeCap, StrokeDefinition};
//! use coversheet_core::color::Color;
//!
//! // Round-capped 4 unit line, as used by the decorated border
//! let stroke = StrokeDefinition::new(Color::default(), 4.0).with_cap(StrokeCap::Round);
//! assert_eq!(stroke.cap(), StrokeCap::Round);
//! ```
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"#000000"`, `0.5` |
//! | `width` | `stroke-width` | `2.0` |
//! | `cap` | `stroke-linecap` | `"butt"`, `"round"`, `"square"` |

use serde::Deserialize;

use crate::color::Color;

/// Defines how line endpoints are rendered.
///
/// Maps directly to SVG `stroke-linecap` attribute values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeCap {
    /// Flat cap at the exact endpoint (SVG default)
    #[default]
    Butt,
    /// Rounded cap extending beyond the endpoint by half the stroke width
    Round,
    /// Square cap extending beyond the endpoint by half the stroke width
    Square,
}

impl StrokeCap {
    /// Returns the SVG stroke-linecap value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// A stroke definition for rendering line segments.
///
/// # Fields
///
/// - `color`: The stroke color
/// - `width`: The stroke thickness in page units
/// - `cap`: How line endpoints are rendered
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    cap: StrokeCap,
}

impl StrokeDefinition {
    /// Creates a new stroke with the given color and width and a butt cap.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            cap: StrokeCap::Butt,
        }
    }

    /// Returns this stroke with the given cap style.
    pub fn with_cap(mut self, cap: StrokeCap) -> Self {
        self.cap = cap;
        self
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke cap style.
    pub fn cap(&self) -> StrokeCap {
        self.cap
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
            cap: StrokeCap::default(),
        }
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// # Examples
///
/// ```
/// use coversheet_core::draw::{StrokeCap, StrokeDefinition};
/// use coversheet_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::new(Color::default(), 2.0).with_cap(StrokeCap::Round);
/// let line = svg_element::Line::new()
///     .set("x1", 0)
///     .set("y1", 0)
///     .set("x2", 100)
///     .set("y2", 0);
///
/// let line = coversheet_core::apply_stroke!(line, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
            .set("stroke-linecap", $stroke.cap().to_svg_value())
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color().to_string(), "black");
        assert_eq!(stroke.cap(), StrokeCap::Butt);
    }

    #[test]
    fn test_stroke_with_cap() {
        let stroke =
            StrokeDefinition::new(Color::new("red").unwrap(), 4.0).with_cap(StrokeCap::Round);
        assert_eq!(stroke.width(), 4.0);
        assert_eq!(stroke.color().to_string(), "red");
        assert_eq!(stroke.cap(), StrokeCap::Round);
    }

    #[test]
    fn test_stroke_cap_svg_values() {
        assert_eq!(StrokeCap::Butt.to_svg_value(), "butt");
        assert_eq!(StrokeCap::Round.to_svg_value(), "round");
        assert_eq!(StrokeCap::Square.to_svg_value(), "square");
    }

    #[test]
    fn test_stroke_cap_deserialize() {
        #[derive(Deserialize)]
        struct Holder {
            cap: StrokeCap,
        }

        let holder: Holder = toml::from_str("cap = \"square\"").unwrap();
        assert_eq!(holder.cap, StrokeCap::Square);
        assert!(toml::from_str::<Holder>("cap = \"pointy\"").is_err());
    }
}
