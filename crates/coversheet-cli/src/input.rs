//! Songbook input loading.

use std::{fs, ops::Range, path::Path};

use log::debug;
use thiserror::Error;

use coversheet::Songbook;

use crate::error::CliError;

/// A songbook file that could not be deserialized.
///
/// Keeps the source text and the offending byte range so the error can be
/// rendered with a snippet.
#[derive(Debug, Error)]
#[error("Invalid songbook {path}: {message}")]
pub struct InputError {
    path: String,
    message: String,
    src: String,
    span: Option<Range<usize>>,
}

impl InputError {
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The parser's description of the problem.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    /// Byte range of the problem within [`InputError::src`], when known.
    pub fn span(&self) -> Option<Range<usize>> {
        self.span.clone()
    }
}

/// Read and deserialize a songbook TOML file.
///
/// # Errors
///
/// Returns [`CliError::Coversheet`] if the file cannot be read and
/// [`CliError::Input`] if its content is not a valid songbook.
pub fn load_songbook(path: impl AsRef<Path>) -> Result<Songbook, CliError> {
    let path = path.as_ref();
    let src = fs::read_to_string(path)?;
    let songbook = parse_songbook(&path.display().to_string(), src)?;

    debug!(
        group = songbook.ensemble().group(),
        songs = songbook.songs().len();
        "Songbook loaded"
    );
    Ok(songbook)
}

/// Deserialize a songbook from TOML text read from `path`.
fn parse_songbook(path: &str, src: String) -> Result<Songbook, InputError> {
    toml::from_str(&src).map_err(|err| InputError {
        path: path.to_string(),
        message: err.message().to_string(),
        span: err.span(),
        src,
    })
}
