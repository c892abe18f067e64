//! Command-line argument definitions for the ShapeKit driver.
//!
//! The driver runs an editing script against a fresh or loaded design and
//! can write the result as XML and as SVG.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the headless shape editor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Editing script to run, one command per line
    #[arg(help = "Path to the script file")]
    pub script: Option<PathBuf>,

    /// Path to configuration file (TOML or JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Design to load before running the script
    #[arg(short, long)]
    pub load: Option<PathBuf>,

    /// Where to save the design after the script
    #[arg(short, long)]
    pub save: Option<PathBuf>,

    /// Where to write an SVG rendering of the final design
    #[arg(long)]
    pub svg: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
