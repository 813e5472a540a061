//! Export of composed pages to output documents.
//!
//! # Pipeline Position
//!
//! ```text
//! Song + Ensemble
//!     ↓ compose (border, text layout)
//! Draw commands
//!     ↓ export (this module)
//! Output File
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::SvgSurface`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`CoversheetError::Export`] at the crate
//! boundary.
//!
//! [`CoversheetError::Export`]: crate::CoversheetError::Export

/// SVG export backend.
pub mod svg;

/// Errors that can occur during page export.
///
/// This type is converted into [`CoversheetError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// [`CoversheetError::Export`]: crate::CoversheetError::Export
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
