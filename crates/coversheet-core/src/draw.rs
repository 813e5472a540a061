//! Drawing primitives shared by the layout engine and export backends.
//!
//! - [`Segment`] and [`StrokeDefinition`] describe stroked lines
//! - [`TextDefinition`] and [`FontFace`] describe text runs
//! - [`FontMetrics`] measures text, [`SystemFontMetrics`] does so with cosmic-text
//! - [`Surface`] receives drawing commands, [`RecordingSurface`] keeps them in memory
mod segment;
mod stroke;
mod surface;
mod text;

pub use segment::Segment;
pub use stroke::{StrokeCap, StrokeDefinition};
pub use surface::{DrawCommand, RecordingSurface, Surface};
pub use text::{
    FontError, FontFace, FontMetrics, FontStyle, FontWeight, SystemFontMetrics, TextDefinition,
};
