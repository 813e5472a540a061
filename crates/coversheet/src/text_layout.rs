//! Centered text blocks with optional two-line wrapping.
//!
//! Text is centered horizontally on the page at a given baseline. When a
//! maximum width is given and the text is wider, it is split into exactly two
//! lines at the word boundary that best balances their character counts.
//! The second line is placed one font size plus the line spacing below the
//! first.
//!
//! Layout is computed by [`layout_centered`] without side effects and drawn by
//! [`draw_centered`], which reports the vertical space consumed as a
//! [`TextBlock`] so the caller can stack the next element below it.

use log::{debug, trace};
use serde::Deserialize;

use coversheet_core::{
    draw::{FontError, FontMetrics, Surface, TextDefinition},
    geometry::Point,
};

/// Wrapping and spacing options for [`draw_centered`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CenteredTextOptions {
    line_spacing: f32,
    max_width: Option<f32>,
}

impl CenteredTextOptions {
    /// Creates options with no spacing and no width limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the extra gap between wrapped lines, added to the font size.
    pub fn with_line_spacing(mut self, line_spacing: f32) -> Self {
        self.line_spacing = line_spacing;
        self
    }

    /// Sets the width above which text is wrapped into two lines.
    pub fn with_max_width(mut self, max_width: f32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn line_spacing(&self) -> f32 {
        self.line_spacing
    }

    pub fn max_width(&self) -> Option<f32> {
        self.max_width
    }
}

/// Vertical extent of a drawn text block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBlock {
    height: f32,
    line_count: usize,
}

impl TextBlock {
    /// Distance from the first baseline down to the last one.
    ///
    /// A single line consumes no height.
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }
}

/// One line of text with its draw origin.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedLine {
    content: String,
    origin: Point,
    width: f32,
}

impl PositionedLine {
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Left end of the baseline.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Measured width of the line.
    pub fn width(&self) -> f32 {
        self.width
    }
}

/// The result of laying out a centered text block.
#[derive(Debug, Clone, PartialEq)]
pub struct CenteredText {
    lines: Vec<PositionedLine>,
    block: TextBlock,
}

impl CenteredText {
    pub fn lines(&self) -> &[PositionedLine] {
        &self.lines
    }

    pub fn block(&self) -> TextBlock {
        self.block
    }
}

/// Splits `text` into two lines at the word boundary minimizing the
/// difference in character count between them.
///
/// Ties go to the earliest boundary. Returns `None` when there are fewer
/// than two words.
///
/// # Examples
///
/// ```
/// # use coversheet::text_layout::split_balanced;
/// let (left, right) = split_balanced("Longer Song Title That Should Wrap").unwrap();
/// assert_eq!(left, "Longer Song Title");
/// assert_eq!(right, "That Should Wrap");
///
/// assert_eq!(split_balanced("Overture"), None);
/// ```
pub fn split_balanced(text: &str) -> Option<(String, String)> {
    let words: Vec<&str> = text.split_whitespace().collect();

    (1..words.len())
        .map(|index| {
            let left = words[..index].join(" ");
            let right = words[index..].join(" ");
            let diff = left.chars().count().abs_diff(right.chars().count());
            (diff, left, right)
        })
        .min_by_key(|(diff, ..)| *diff)
        .map(|(_, left, right)| (left, right))
}

/// Computes the lines and origins of a centered text block.
///
/// # Arguments
///
/// * `metrics` - Measures line widths
/// * `page_width` - Width of the page the text is centered on
/// * `baseline_y` - Baseline of the first line
/// * `text` - Content to lay out
/// * `definition` - Font face and size
/// * `options` - Line spacing and optional maximum width
///
/// # Errors
///
/// Propagates any [`FontError`] from `metrics`.
pub fn layout_centered<M: FontMetrics + ?Sized>(
    metrics: &M,
    page_width: f32,
    baseline_y: f32,
    text: &str,
    definition: &TextDefinition,
    options: CenteredTextOptions,
) -> Result<CenteredText, FontError> {
    let size = definition.size();
    let face = definition.face();
    let text_width = metrics.width_of_text_at_size(face, text, size)?;

    let contents = match options.max_width() {
        Some(max_width) if text_width > max_width => match split_balanced(text) {
            Some((left, right)) => vec![left, right],
            None => {
                debug!(text = text, width = text_width, max_width = max_width; "Single word overflows maximum width");
                vec![text.to_string()]
            }
        },
        _ => vec![text.to_string()],
    };

    let mut lines = Vec::with_capacity(contents.len());
    for (idx, content) in contents.into_iter().enumerate() {
        let offset = idx as f32;
        let y = baseline_y - size * offset - options.line_spacing() * offset;
        let width = metrics.width_of_text_at_size(face, &content, size)?;
        let x = page_width / 2.0 - width / 2.0;

        if let Some(max_width) = options.max_width().filter(|max_width| width > *max_width) {
            debug!(
                line = content.as_str(),
                width = width,
                max_width = max_width;
                "Line overflows maximum width"
            );
        }

        lines.push(PositionedLine {
            content,
            origin: Point::new(x, y),
            width,
        });
    }

    let last_y = lines.last().map_or(baseline_y, |line| line.origin.y());
    let block = TextBlock {
        height: baseline_y - last_y,
        line_count: lines.len(),
    };

    Ok(CenteredText { lines, block })
}

/// Draws `text` centered on the surface's page, wrapping into two lines when
/// it is wider than the configured maximum width.
///
/// Lines are emitted in order, one [`Surface::draw_text`] call each.
///
/// # Errors
///
/// Propagates any [`FontError`] from `metrics`. Nothing is drawn in that case.
pub fn draw_centered<S, M>(
    surface: &mut S,
    metrics: &M,
    baseline_y: f32,
    text: &str,
    definition: &TextDefinition,
    options: CenteredTextOptions,
) -> Result<TextBlock, FontError>
where
    S: Surface + ?Sized,
    M: FontMetrics + ?Sized,
{
    let page_width = surface.page_size().width();
    let layout = layout_centered(metrics, page_width, baseline_y, text, definition, options)?;

    for line in layout.lines() {
        trace!(content = line.content(), origin:? = line.origin(); "Drawing text line");
        surface.draw_text(line.content(), line.origin(), definition);
    }

    Ok(layout.block())
}
