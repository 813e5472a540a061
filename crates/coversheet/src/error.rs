//! Error types for Coversheet operations.
//!
//! [`CoversheetError`] is the top-level error returned by
//! [`CoversheetBuilder`](crate::CoversheetBuilder). [`LayoutError`] covers the
//! border decorator and the text layout engine.

use std::io;

use thiserror::Error;

use coversheet_core::draw::FontError;

/// Errors raised while computing page geometry.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The page size or border settings are not usable at all.
    #[error("Invalid border configuration: {0}")]
    InvalidBorder(String),

    /// A border edge is too short to hold a corner flourish at each end.
    #[error(
        "Degenerate border: edge of {edge} units is shorter than the {minimum} units needed for corner decorations"
    )]
    DegenerateBorder { edge: f32, minimum: f32 },

    /// Text could not be measured.
    #[error(transparent)]
    Font(#[from] FontError),
}

/// The main error type for Coversheet operations.
#[derive(Debug, Error)]
pub enum CoversheetError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<FontError> for CoversheetError {
    fn from(error: FontError) -> Self {
        Self::Layout(LayoutError::Font(error))
    }
}

impl From<crate::export::Error> for CoversheetError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
