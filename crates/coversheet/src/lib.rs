//! Coversheet - Printable coversheets for music folders.
//!
//! Each coversheet is a single page with a decorated double border, the
//! song title and composer centered near the top, and the performing group
//! and year centered in the footer.
//!
//! The two layout pieces are usable on their own:
//!
//! - [`border`] - Thin and thick borders with square corner flourishes
//! - [`text_layout`] - Centered text with balanced two-line wrapping
//!
//! Both draw onto any [`Surface`](draw::Surface). [`CoversheetBuilder`]
//! composes them into a full page and exports it through [`export::svg`].

pub mod border;
pub mod config;
pub mod export;
pub mod song;
pub mod text_layout;

mod error;

pub use coversheet_core::{color, draw, geometry};

pub use error::{CoversheetError, LayoutError};
pub use song::{Ensemble, Song, Songbook};

use std::path::Path;

use log::{debug, info};

use coversheet_core::draw::{FontMetrics, Surface, SystemFontMetrics};

use border::BorderDecorator;
use config::AppConfig;
use export::svg::SvgSurface;
use text_layout::{CenteredTextOptions, draw_centered};

/// Builder for composing and rendering coversheet pages.
///
/// Text is measured with the [`FontMetrics`] the builder holds. The default
/// uses the process-wide [`SystemFontMetrics`].
///
/// # Examples
///
/// ```rust,no_run
/// use coversheet::{CoversheetBuilder, Ensemble, Song, config::AppConfig};
///
/// let song = Song::new("Sample Song Title", "Some Composer");
/// let ensemble = Ensemble::new("Group Name", 2025);
///
/// // With custom config
/// let builder = CoversheetBuilder::new(AppConfig::default());
///
/// let svg = builder.render_svg(&song, &ensemble)
///     .expect("Failed to render");
///
/// // Or use default config
/// let builder = CoversheetBuilder::default();
/// ```
pub struct CoversheetBuilder<'m> {
    config: AppConfig,
    metrics: &'m dyn FontMetrics,
}

impl Default for CoversheetBuilder<'static> {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl std::fmt::Debug for CoversheetBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoversheetBuilder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CoversheetBuilder<'static> {
    /// Create a new coversheet builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Page, border, style and placement settings
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            metrics: SystemFontMetrics::shared(),
        }
    }
}

impl<'m> CoversheetBuilder<'m> {
    /// Replaces the font metrics used to measure text.
    pub fn with_metrics<'n>(self, metrics: &'n dyn FontMetrics) -> CoversheetBuilder<'n> {
        CoversheetBuilder {
            config: self.config,
            metrics,
        }
    }

    /// Returns the configuration this builder renders with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Draw a complete coversheet page onto `surface`.
    ///
    /// Emits, in order: the thin border, the thick border with its corner
    /// flourishes, the title, the composer, the group and the year.
    ///
    /// # Errors
    ///
    /// Returns [`CoversheetError::Config`] for an unparsable text color and
    /// [`CoversheetError::Layout`] if the border does not fit the surface or
    /// text cannot be measured.
    pub fn draw_page<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        song: &Song,
        ensemble: &Ensemble,
    ) -> Result<(), CoversheetError> {
        let style = self.config.style();
        let placement = self.config.placement();
        let color = style.text_color().map_err(CoversheetError::Config)?;
        let family = style.font_family();
        let page = surface.page_size();

        let decorator = BorderDecorator::new(self.config.border().clone()).with_color(color);
        let segment_count = decorator.draw(surface)?;
        debug!(segments = segment_count; "Borders drawn");

        let title_def = style.title().text_definition(family, color);
        let title_y = placement.title_baseline(page.height());
        let title_options = CenteredTextOptions::new()
            .with_line_spacing(placement.title_line_spacing())
            .with_max_width(placement.title_max_width(page.width()));
        let title_block = draw_centered(
            surface,
            self.metrics,
            title_y,
            song.title(),
            &title_def,
            title_options,
        )?;
        debug!(lines = title_block.line_count(), height = title_block.height(); "Title drawn");

        let composer_def = style.composer().text_definition(family, color);
        let composer_y =
            placement.composer_baseline(title_y, title_block.height(), composer_def.size());
        draw_centered(
            surface,
            self.metrics,
            composer_y,
            song.composer(),
            &composer_def,
            CenteredTextOptions::new(),
        )?;

        // Year is placed first so the group can sit above it
        let year_def = style.year().text_definition(family, color);
        let year_y = placement.year_baseline();
        let group_def = style.group().text_definition(family, color);
        let group_y = placement.group_baseline(year_y, year_def.size());

        draw_centered(
            surface,
            self.metrics,
            group_y,
            ensemble.group(),
            &group_def,
            CenteredTextOptions::new(),
        )?;
        draw_centered(
            surface,
            self.metrics,
            year_y,
            &ensemble.year().to_string(),
            &year_def,
            CenteredTextOptions::new(),
        )?;

        Ok(())
    }

    /// Compose a coversheet onto a fresh [`SvgSurface`] carrying the
    /// document metadata.
    ///
    /// # Errors
    ///
    /// See [`CoversheetBuilder::draw_page`].
    pub fn compose_svg(
        &self,
        song: &Song,
        ensemble: &Ensemble,
    ) -> Result<SvgSurface, CoversheetError> {
        info!(title = song.title(); "Generating coversheet");

        let mut surface = SvgSurface::new(self.config.page().size()).with_title(song.title());
        if let Some(author) = self.config.document().author() {
            surface = surface.with_author(author);
        }

        self.draw_page(&mut surface, song, ensemble)?;
        Ok(surface)
    }

    /// Render a coversheet to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`CoversheetError`] for configuration, layout or rendering
    /// errors.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use coversheet::{CoversheetBuilder, Ensemble, Song};
    ///
    /// let builder = CoversheetBuilder::default();
    /// let svg = builder
    ///     .render_svg(
    ///         &Song::new("Longer Song Title That Should Wrap", "Different Person"),
    ///         &Ensemble::new("Group Name", 2025),
    ///     )
    ///     .expect("Failed to render coversheet");
    ///
    /// println!("{}", svg);
    /// ```
    pub fn render_svg(&self, song: &Song, ensemble: &Ensemble) -> Result<String, CoversheetError> {
        let svg = self.compose_svg(song, ensemble)?.render()?;
        info!(title = song.title(); "SVG rendered successfully");
        Ok(svg)
    }

    /// Render a coversheet and write it to `path` as SVG.
    ///
    /// # Errors
    ///
    /// Returns [`CoversheetError`] for configuration, layout, rendering or
    /// I/O errors.
    pub fn write_svg(
        &self,
        song: &Song,
        ensemble: &Ensemble,
        path: &Path,
    ) -> Result<(), CoversheetError> {
        self.compose_svg(song, ensemble)?.write_to(path)?;
        Ok(())
    }
}
