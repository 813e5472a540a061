//! Text definitions and font measurement.
//!
//! # Overview
//!
//! - [`FontFace`] - Family, weight and style of a font
//! - [`TextDefinition`] - A font face at a size with a fill color
//! - [`FontMetrics`] - The text-width measurement capability used by layout
//! - [`SystemFontMetrics`] - A [`FontMetrics`] backed by cosmic-text shaping
//!
//! # Quick Start
//!
//! ```
//! # use coversheet_core::draw::{FontFace, FontStyle, TextDefinition};
//! let face = FontFace::new("Mulish").with_style(FontStyle::Italic);
//! let mut composer = TextDefinition::new(face, 28.0);
//! composer.set_opacity(0.7);
//! assert_eq!(composer.size(), 28.0);
//! ```

use std::{
    path::Path,
    sync::{Mutex, OnceLock},
};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Style, Weight};
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use crate::color::Color;

/// Line height used while shaping, relative to the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.15;

/// Average advance relative to the font size, used when shaping yields no runs.
const FALLBACK_ADVANCE_FACTOR: f32 = 0.55;

/// Errors raised while measuring text.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("invalid font size {0}, expected a finite positive number")]
    InvalidSize(f32),

    #[error("font measurement unavailable: {0}")]
    Unavailable(String),

    #[error("font directory `{0}` does not exist")]
    MissingFontsDir(String),
}

/// Font weight.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    /// Returns the SVG font-weight value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Regular => "normal",
            Self::Bold => "bold",
        }
    }

    fn to_cosmic(self) -> Weight {
        match self {
            Self::Regular => Weight::NORMAL,
            Self::Bold => Weight::BOLD,
        }
    }
}

/// Font style.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FontStyle {
    /// Returns the SVG font-style value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
        }
    }

    fn to_cosmic(self) -> Style {
        match self {
            Self::Normal => Style::Normal,
            Self::Italic => Style::Italic,
        }
    }
}

/// A font family together with its weight and style.
///
/// Deserializes from a table such as `{ family = "Mulish", weight = "bold" }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FontFace {
    family: String,
    #[serde(default)]
    weight: FontWeight,
    #[serde(default)]
    style: FontStyle,
}

impl FontFace {
    /// Creates a regular, upright face of `family`.
    pub fn new(family: &str) -> Self {
        Self {
            family: family.to_string(),
            weight: FontWeight::default(),
            style: FontStyle::default(),
        }
    }

    /// Returns this face with the given weight.
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Returns this face with the given style.
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }
}

impl Default for FontFace {
    fn default() -> Self {
        Self::new("Mulish")
    }
}

/// Visual style for a run of text: face, size and fill color.
///
/// Opacity is stored as the alpha channel of the fill color.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    face: FontFace,
    size: f32,
    color: Color,
}

impl TextDefinition {
    /// Creates an opaque black text definition.
    pub fn new(face: FontFace, size: f32) -> Self {
        Self {
            face,
            size,
            color: Color::default(),
        }
    }

    /// Sets the fill color, alpha included.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the fill opacity, between 0.0 (transparent) and 1.0 (opaque).
    pub fn set_opacity(&mut self, opacity: f32) {
        self.color = self.color.with_alpha(opacity);
    }

    /// Sets the font size in page units.
    pub fn set_size(&mut self, size: f32) {
        self.size = size;
    }

    pub fn face(&self) -> &FontFace {
        &self.face
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn opacity(&self) -> f32 {
        self.color.alpha()
    }
}

/// Text-width measurement capability.
///
/// Layout code only ever asks for the advance width of a single line; how
/// fonts are found and shaped is up to the implementation.
pub trait FontMetrics {
    /// Returns the width in page units of `text` set in `face` at `size`.
    ///
    /// # Errors
    ///
    /// Returns a [`FontError`] when the text cannot be measured. Callers
    /// treat this as fatal for the layout at hand.
    fn width_of_text_at_size(&self, face: &FontFace, text: &str, size: f32)
    -> Result<f32, FontError>;
}

impl<M: FontMetrics + ?Sized> FontMetrics for &M {
    fn width_of_text_at_size(
        &self,
        face: &FontFace,
        text: &str,
        size: f32,
    ) -> Result<f32, FontError> {
        (**self).width_of_text_at_size(face, text, size)
    }
}

/// Measures text with cosmic-text.
///
/// Holds a [`FontSystem`] behind a mutex, since building one scans every
/// installed font.
pub struct SystemFontMetrics {
    font_system: Mutex<FontSystem>,
}

static SHARED_METRICS: OnceLock<SystemFontMetrics> = OnceLock::new();

impl std::fmt::Debug for SystemFontMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemFontMetrics").finish_non_exhaustive()
    }
}

impl Default for SystemFontMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemFontMetrics {
    /// Creates a measurer over the system's installed fonts.
    pub fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    /// Returns a process-wide measurer, created on first use.
    pub fn shared() -> &'static Self {
        SHARED_METRICS.get_or_init(Self::new)
    }

    /// Loads every font file found under `dir` in addition to system fonts.
    ///
    /// Faces loaded here take part in measurement from the next call on.
    ///
    /// # Errors
    ///
    /// - [`FontError::MissingFontsDir`] if `dir` is not a directory.
    /// - [`FontError::Unavailable`] if the font system lock is poisoned.
    pub fn load_fonts_dir(&self, dir: impl AsRef<Path>) -> Result<(), FontError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(FontError::MissingFontsDir(dir.display().to_string()));
        }

        let mut font_system = self.lock()?;
        font_system.db_mut().load_fonts_dir(dir);
        debug!(
            path = dir.display().to_string(),
            faces = font_system.db().len();
            "Loaded font directory"
        );
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, FontSystem>, FontError> {
        self.font_system
            .lock()
            .map_err(|_| FontError::Unavailable("font system lock poisoned".to_string()))
    }
}

impl FontMetrics for SystemFontMetrics {
    fn width_of_text_at_size(
        &self,
        face: &FontFace,
        text: &str,
        size: f32,
    ) -> Result<f32, FontError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(FontError::InvalidSize(size));
        }
        if text.is_empty() {
            return Ok(0.0);
        }

        let mut font_system = self.lock()?;

        let metrics = Metrics::new(size, size * LINE_HEIGHT_FACTOR);
        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new()
            .family(Family::Name(face.family()))
            .weight(face.weight().to_cosmic())
            .style(face.style().to_cosmic());

        // Unbounded so the whole string stays on one line
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if layout_runs.is_empty() {
            return Ok(text.chars().count() as f32 * size * FALLBACK_ADVANCE_FACTOR);
        }

        let width = layout_runs
            .iter()
            .filter_map(|run| run.glyphs.last())
            .map(|last| last.x + last.w)
            .fold(0.0_f32, f32::max);

        Ok(width)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_font_face_builders() {
        let face = FontFace::new("Mulish")
            .with_weight(FontWeight::Bold)
            .with_style(FontStyle::Italic);
        assert_eq!(face.family(), "Mulish");
        assert_eq!(face.weight(), FontWeight::Bold);
        assert_eq!(face.style(), FontStyle::Italic);
    }

    #[test]
    fn test_font_face_default() {
        let face = FontFace::default();
        assert_eq!(face.family(), "Mulish");
        assert_eq!(face.weight(), FontWeight::Regular);
        assert_eq!(face.style(), FontStyle::Normal);
    }

    #[test]
    fn test_font_svg_values() {
        assert_eq!(FontWeight::Regular.to_svg_value(), "normal");
        assert_eq!(FontWeight::Bold.to_svg_value(), "bold");
        assert_eq!(FontStyle::Normal.to_svg_value(), "normal");
        assert_eq!(FontStyle::Italic.to_svg_value(), "italic");
    }

    #[test]
    fn test_text_definition_opacity() {
        let mut def = TextDefinition::new(FontFace::default(), 18.0);
        assert_approx_eq!(f32, def.opacity(), 1.0);

        def.set_opacity(0.6);
        assert_approx_eq!(f32, def.opacity(), 0.6);

        def.set_size(20.0);
        assert_approx_eq!(f32, def.size(), 20.0);
    }

    #[test]
    fn test_text_definition_set_color_replaces_alpha() {
        let mut def = TextDefinition::new(FontFace::default(), 18.0);
        def.set_opacity(0.5);
        def.set_color(Color::new("navy").unwrap());
        assert_approx_eq!(f32, def.opacity(), 1.0);
    }

    #[test]
    fn test_system_metrics_rejects_invalid_size() {
        let metrics = SystemFontMetrics::shared();
        let face = FontFace::default();

        assert!(matches!(
            metrics.width_of_text_at_size(&face, "Title", 0.0),
            Err(FontError::InvalidSize(_))
        ));
        assert!(matches!(
            metrics.width_of_text_at_size(&face, "Title", f32::NAN),
            Err(FontError::InvalidSize(_))
        ));
    }

    #[test]
    fn test_system_metrics_empty_text_is_zero() {
        let width = SystemFontMetrics::shared()
            .width_of_text_at_size(&FontFace::default(), "", 48.0)
            .unwrap();
        assert_approx_eq!(f32, width, 0.0);
    }

    #[test]
    fn test_system_metrics_measures_non_negative_width() {
        let width = SystemFontMetrics::shared()
            .width_of_text_at_size(&FontFace::default(), "Sample Song Title", 48.0)
            .unwrap();
        assert!(width >= 0.0, "width should not be negative, got {width}");
    }

    #[test]
    fn test_load_fonts_dir() {
        let metrics = SystemFontMetrics::new();
        let dir = Path::new(env!("CARGO_MANIFEST_DIR"));

        metrics.load_fonts_dir(dir).unwrap();
        let width = metrics
            .width_of_text_at_size(&FontFace::default(), "Title", 24.0)
            .unwrap();
        assert!(width >= 0.0);
    }

    #[test]
    fn test_load_missing_fonts_dir_is_rejected() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("no-such-fonts");
        let err = SystemFontMetrics::shared().load_fonts_dir(&dir).unwrap_err();

        assert!(matches!(
            err,
            FontError::MissingFontsDir(ref path) if path.ends_with("no-such-fonts")
        ));
        assert!(err.to_string().contains("does not exist"));
    }
}
