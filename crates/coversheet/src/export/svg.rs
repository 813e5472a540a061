//! SVG rendering surface.

use std::{fs::File, io::Write, path::Path};

use log::{debug, error, info};
use svg::{
    Document, Node,
    node::{
        Text as TextNode,
        element::{self as svg_element, Element, Title},
    },
};

use coversheet_core::{
    apply_stroke,
    draw::{Segment, Surface, TextDefinition},
    geometry::{Point, Size},
};

use crate::export;

/// A [`Surface`] that builds an SVG document.
///
/// Page coordinates have their origin at the bottom-left corner; SVG puts it
/// at the top-left. Every y coordinate is flipped on the way in.
///
/// # Examples
///
/// ```
/// # use coversheet::export::svg::SvgSurface;
/// # use coversheet_core::draw::{Segment, StrokeDefinition, Surface};
/// # use coversheet_core::geometry::{Point, Size};
/// let mut surface = SvgSurface::new(Size::new(100.0, 100.0)).with_title("Overture");
/// surface.draw_line(&Segment::new(
///     Point::new(10.0, 10.0),
///     Point::new(90.0, 10.0),
///     StrokeDefinition::default(),
/// ));
///
/// let svg = surface.render().unwrap();
/// assert!(svg.contains("<title>"));
/// assert!(svg.contains("Overture"));
/// assert!(svg.contains(r#"y1="90""#));
/// ```
#[derive(Debug)]
pub struct SvgSurface {
    page_size: Size,
    title: Option<String>,
    author: Option<String>,
    nodes: Vec<Box<dyn svg::Node>>,
    invalid: Option<String>,
}

impl SvgSurface {
    /// Creates an empty surface for a page of `page_size` units.
    pub fn new(page_size: Size) -> Self {
        Self {
            page_size,
            title: None,
            author: None,
            nodes: Vec::new(),
            invalid: None,
        }
    }

    /// Sets the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the document author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Number of elements drawn so far.
    pub fn element_count(&self) -> usize {
        self.nodes.len()
    }

    /// Converts a page point to SVG coordinates.
    fn flip(&self, point: Point) -> Point {
        point.with_y(self.page_size.height() - point.y())
    }

    /// Remembers the first non-finite coordinate so it can be reported on render.
    fn check_finite(&mut self, what: &str, points: &[Point]) {
        if self.invalid.is_some() {
            return;
        }
        if let Some(point) = points
            .iter()
            .find(|point| !point.x().is_finite() || !point.y().is_finite())
        {
            self.invalid = Some(format!("{what} has non-finite coordinate {point:?}"));
        }
    }

    /// Builds the SVG document from the drawn elements.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if any element was drawn at a
    /// non-finite coordinate.
    pub fn into_document(self) -> Result<Document, export::Error> {
        if let Some(message) = self.invalid {
            error!(message = message.as_str(); "Cannot render SVG document");
            return Err(export::Error::Render(message));
        }

        let width = self.page_size.width();
        let height = self.page_size.height();

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height);

        if let Some(title) = self.title {
            doc = doc.add(Title::new(title));
        }
        if let Some(author) = self.author {
            let mut desc = Element::new("desc");
            desc.append(TextNode::new(format!("Author: {author}")));
            doc = doc.add(desc);
        }

        debug!(elements = self.nodes.len(); "SVG document rendered");

        Ok(self.nodes.into_iter().fold(doc, |doc, node| doc.add(node)))
    }

    /// Renders the document to an SVG string.
    ///
    /// # Errors
    ///
    /// See [`SvgSurface::into_document`].
    pub fn render(self) -> Result<String, export::Error> {
        Ok(self.into_document()?.to_string())
    }

    /// Writes the document to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Io`] if the file cannot be created or
    /// written, or [`export::Error::Render`] as for
    /// [`SvgSurface::into_document`].
    pub fn write_to(self, path: &Path) -> Result<(), export::Error> {
        let file_name = path.display().to_string();
        let doc = self.into_document()?;

        info!(file_name = file_name.as_str(); "Creating SVG file");
        let mut f = match File::create(path) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name = file_name.as_str(), err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = write!(f, "{doc}") {
            error!(file_name = file_name.as_str(), err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }
}

impl Surface for SvgSurface {
    fn page_size(&self) -> Size {
        self.page_size
    }

    fn draw_line(&mut self, segment: &Segment) {
        self.check_finite("line", &[segment.start(), segment.end()]);

        let start = self.flip(segment.start());
        let end = self.flip(segment.end());
        let stroke = segment.stroke();

        let line = svg_element::Line::new()
            .set("x1", start.x())
            .set("y1", start.y())
            .set("x2", end.x())
            .set("y2", end.y());
        let line = apply_stroke!(line, stroke);

        self.nodes.push(Box::new(line));
    }

    fn draw_text(&mut self, content: &str, origin: Point, definition: &TextDefinition) {
        self.check_finite("text", &[origin]);

        let origin = self.flip(origin);
        let face = definition.face();
        let color = definition.color();

        let text = svg_element::Text::new(content)
            .set("x", origin.x())
            .set("y", origin.y())
            .set("font-family", face.family())
            .set("font-size", definition.size())
            .set("font-weight", face.weight().to_svg_value())
            .set("font-style", face.style().to_svg_value())
            .set("fill", &color)
            .set("fill-opacity", color.alpha());

        self.nodes.push(Box::new(text));
    }
}
