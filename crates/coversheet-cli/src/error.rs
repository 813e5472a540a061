//! Top-level CLI error.

use std::io;

use thiserror::Error;

use coversheet::CoversheetError;

use crate::input::InputError;

/// Errors returned by [`run`](crate::run).
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Coversheet(#[from] CoversheetError),

    #[error(transparent)]
    Input(#[from] InputError),
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Coversheet(CoversheetError::Io(err))
    }
}
