//! Command-line argument definitions for the Coversheet CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the songbook input, the output
//! directory, configuration file selection, extra fonts and logging
//! verbosity.

use clap::Parser;

/// Command-line arguments for the coversheet generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the songbook file (TOML)
    #[arg(help = "Path to the songbook file")]
    pub input: String,

    /// Directory the coversheets are written to, created if missing
    #[arg(short, long, default_value = "output")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory of font files loaded before measuring text
    #[arg(long)]
    pub fonts_dir: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
