//! CLI logic for the coversheet generator.
//!
//! Reads a songbook, renders one coversheet per song and writes each to the
//! output directory as `<title> (Coversheet).svg`.

pub mod error_adapter;

mod args;
mod config;
mod error;
mod input;

pub use args::Args;
pub use error::CliError;
pub use input::{InputError, load_songbook};

use std::{fs, path::Path};

use log::{info, warn};

use coversheet::{CoversheetBuilder, CoversheetError, draw::SystemFontMetrics};

/// Characters that are not allowed in file names on common platforms.
const RESERVED_FILE_NAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Run the coversheet CLI application
///
/// Songs are rendered in input order. The first failure stops the run;
/// coversheets already written are left in place.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - A missing fonts directory
/// - Songbook parsing errors
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_dir = args.output;
        "Processing songbook"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    if let Some(fonts_dir) = &args.fonts_dir {
        SystemFontMetrics::shared()
            .load_fonts_dir(fonts_dir)
            .map_err(CoversheetError::from)?;
    }
    let songbook = load_songbook(&args.input)?;

    let output_dir = Path::new(&args.output);
    fs::create_dir_all(output_dir)?;

    if songbook.songs().is_empty() {
        warn!(input_path = args.input; "Songbook has no songs");
    }

    info!(songs = songbook.songs().len(); "Starting coversheet generation");

    let builder = CoversheetBuilder::new(app_config);
    for song in songbook.songs() {
        let output_path = output_dir.join(output_file_name(song.title()));
        builder.write_svg(song, songbook.ensemble(), &output_path)?;
        info!(output_file = output_path.display().to_string(); "Coversheet exported");
    }

    Ok(())
}

/// Output file name for a song titled `title`.
///
/// Characters reserved in file names and control characters are replaced
/// with `_`.
pub fn output_file_name(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| {
            if RESERVED_FILE_NAME_CHARS.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();
    format!("{stem} (Coversheet).svg")
}
