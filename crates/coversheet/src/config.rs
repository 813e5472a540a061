//! Configuration types for coversheet rendering.
//!
//! Every structure implements [`serde::Deserialize`] with defaults on every
//! field, so a configuration file only needs to name what it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining all sections.
//! - [`PageConfig`] - Page dimensions in inches.
//! - [`BorderConfig`] - Border margins and thicknesses (re-exported from [`crate::border`]).
//! - [`StyleConfig`] - Font family, text color and per-block text styles.
//! - [`PlacementConfig`] - Vertical placement of the text blocks.
//! - [`DocumentConfig`] - Output document metadata.
//!
//! # Example
//!
//! ```
//! # use coversheet::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().text_color().is_ok());
//! assert_eq!(config.page().size().width(), 612.0);
//! ```

use serde::Deserialize;

use coversheet_core::{
    color::Color,
    draw::{FontFace, FontStyle, FontWeight, TextDefinition},
    geometry::{Size, inches_to_units},
};

pub use crate::border::BorderConfig;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    page: PageConfig,

    #[serde(default)]
    border: BorderConfig,

    #[serde(default)]
    style: StyleConfig,

    #[serde(default)]
    placement: PlacementConfig,

    #[serde(default)]
    document: DocumentConfig,
}

impl AppConfig {
    /// Returns the page configuration.
    pub fn page(&self) -> &PageConfig {
        &self.page
    }

    /// Returns the border configuration.
    pub fn border(&self) -> &BorderConfig {
        &self.border
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the placement configuration.
    pub fn placement(&self) -> &PlacementConfig {
        &self.placement
    }

    /// Returns the document metadata configuration.
    pub fn document(&self) -> &DocumentConfig {
        &self.document
    }

    /// Returns this configuration with the given page section.
    pub fn with_page(mut self, page: PageConfig) -> Self {
        self.page = page;
        self
    }

    /// Returns this configuration with the given border section.
    pub fn with_border(mut self, border: BorderConfig) -> Self {
        self.border = border;
        self
    }

    /// Returns this configuration with the given document section.
    pub fn with_document(mut self, document: DocumentConfig) -> Self {
        self.document = document;
        self
    }
}

/// Page dimensions, in inches. Defaults to US Letter.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    width_in: f32,
    height_in: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            width_in: 8.5,
            height_in: 11.0,
        }
    }
}

impl PageConfig {
    pub fn new(width_in: f32, height_in: f32) -> Self {
        Self {
            width_in,
            height_in,
        }
    }

    /// Page size in page units.
    pub fn size(&self) -> Size {
        Size::from_inches(self.width_in, self.height_in)
    }
}

/// Font and opacity settings for one text block.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextBlockStyle {
    size: f32,
    weight: FontWeight,
    style: FontStyle,
    opacity: f32,
}

impl Default for TextBlockStyle {
    fn default() -> Self {
        Self {
            size: 18.0,
            weight: FontWeight::Regular,
            style: FontStyle::Normal,
            opacity: 1.0,
        }
    }
}

impl TextBlockStyle {
    pub fn new(size: f32, weight: FontWeight, style: FontStyle, opacity: f32) -> Self {
        Self {
            size,
            weight,
            style,
            opacity,
        }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Builds the [`TextDefinition`] for this block in `family`, colored `color`.
    pub fn text_definition(&self, family: &str, color: Color) -> TextDefinition {
        let face = FontFace::new(family)
            .with_weight(self.weight)
            .with_style(self.style);
        let mut definition = TextDefinition::new(face, self.size);
        definition.set_color(color);
        definition.set_opacity(self.opacity);
        definition
    }
}

/// Visual styling of the text blocks.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    font_family: String,

    /// Text and border color, as a color string. Black when unset.
    text_color: Option<String>,

    title: TextBlockStyle,
    composer: TextBlockStyle,
    group: TextBlockStyle,
    year: TextBlockStyle,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_family: FontFace::default().family().to_string(),
            text_color: None,
            title: TextBlockStyle::new(48.0, FontWeight::Bold, FontStyle::Normal, 1.0),
            composer: TextBlockStyle::new(28.0, FontWeight::Regular, FontStyle::Italic, 0.7),
            group: TextBlockStyle::new(28.0, FontWeight::Regular, FontStyle::Normal, 0.8),
            year: TextBlockStyle::new(18.0, FontWeight::Regular, FontStyle::Normal, 0.6),
        }
    }
}

impl StyleConfig {
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the parsed text [`Color`], black if none is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn text_color(&self) -> Result<Color, String> {
        self.text_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map(Option::unwrap_or_default)
            .map_err(|err| format!("Invalid text color in config: {err}"))
    }

    pub fn title(&self) -> &TextBlockStyle {
        &self.title
    }

    pub fn composer(&self) -> &TextBlockStyle {
        &self.composer
    }

    pub fn group(&self) -> &TextBlockStyle {
        &self.group
    }

    pub fn year(&self) -> &TextBlockStyle {
        &self.year
    }
}

/// Vertical placement of the text blocks, in inches unless noted.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Distance from the top of the page to the title baseline.
    title_top_in: f32,
    /// Side margin used to derive the title's maximum width.
    title_side_margin_in: f32,
    /// Extra gap between wrapped title lines, in page units.
    title_line_spacing: f32,
    /// Gap between the last title line and the top of the composer line.
    composer_gap_in: f32,
    /// Distance from the bottom of the page to the year baseline.
    year_baseline_in: f32,
    /// Gap between the top of the year line and the group baseline.
    group_gap_in: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            title_top_in: 2.5,
            title_side_margin_in: 0.5,
            title_line_spacing: 10.0,
            composer_gap_in: 0.5,
            year_baseline_in: 1.25,
            group_gap_in: 0.25,
        }
    }
}

impl PlacementConfig {
    /// Title baseline for a page of `height` units.
    pub fn title_baseline(&self, height: f32) -> f32 {
        height - inches_to_units(self.title_top_in)
    }

    /// Widest the title may be before it wraps, on a page `width` units wide.
    pub fn title_max_width(&self, width: f32) -> f32 {
        width - inches_to_units(self.title_side_margin_in) * 4.0
    }

    pub fn title_line_spacing(&self) -> f32 {
        self.title_line_spacing
    }

    /// Composer baseline below a title block ending `title_height` under `title_y`.
    pub fn composer_baseline(&self, title_y: f32, title_height: f32, composer_size: f32) -> f32 {
        title_y - title_height - inches_to_units(self.composer_gap_in) - composer_size
    }

    pub fn year_baseline(&self) -> f32 {
        inches_to_units(self.year_baseline_in)
    }

    /// Group baseline above a year line of `year_size` at `year_y`.
    pub fn group_baseline(&self, year_y: f32, year_size: f32) -> f32 {
        year_y + year_size + inches_to_units(self.group_gap_in)
    }
}

/// Metadata written into exported documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    author: Option<String>,
}

impl DocumentConfig {
    pub fn new(author: Option<String>) -> Self {
        Self { author }
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }
}
