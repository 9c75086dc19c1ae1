// pixconv/src/cli.rs
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pixconv",
    version,
    about = "Batch convert images in a folder to a chosen output format."
)]
pub struct Cli {
    /// Folder containing source images
    pub input_folder: PathBuf,

    /// Folder to write converted images into (created if missing)
    pub output_folder: PathBuf,

    /// Output format: png, jpg/jpeg, webp
    #[arg(short, long, default_value = "png")]
    pub format: String,

    /// Process subfolders recursively (preserves relative paths)
    #[arg(short, long)]
    pub recursive: bool,

    /// Overwrite outputs if they already exist
    #[arg(long)]
    pub overwrite: bool,

    /// Suppress per-file output (still prints final summary)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Show a progress bar instead of one line per file
    #[arg(long)]
    pub progress: bool,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Warn
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}
