// pixconv/src/core/mod.rs
pub mod converter;
pub mod events;
pub mod format;

pub use converter::{convert_folder, FolderConverter};
pub use events::{
    ConversionEvent, ConversionJob, ConversionOutcome, EventSink, FailureReason, SkipReason,
};
pub use format::{resolve, OutputFormat};

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub input_root: PathBuf,
    pub output_root: PathBuf,
    pub format: OutputFormat,
    pub recursive: bool,
    pub overwrite: bool,
    pub quiet: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_root: PathBuf::from("."),
            output_root: PathBuf::from("converted"),
            format: OutputFormat::Png,
            recursive: false,
            overwrite: false,
            quiet: false,
        }
    }
}

impl ConvertConfig {
    pub fn new<I: Into<PathBuf>, O: Into<PathBuf>>(input_root: I, output_root: O) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
            ..Default::default()
        }
    }

    /// Resolves `token` before anything touches the filesystem.
    pub fn from_token<I: Into<PathBuf>, O: Into<PathBuf>>(
        input_root: I,
        output_root: O,
        token: &str,
    ) -> Result<Self> {
        let format = format::resolve(token)?;
        Ok(Self::new(input_root, output_root).with_format(format))
    }

    /// PNG output, top level only, existing outputs always replaced.
    pub fn minimal<I: Into<PathBuf>, O: Into<PathBuf>>(input_root: I, output_root: O) -> Self {
        Self::new(input_root, output_root)
            .with_format(OutputFormat::Png)
            .with_recursive(false)
            .with_overwrite(true)
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_input_root(&self.input_root)
    }
}

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Unsupported format: {0:?}")]
    UnsupportedFormat(String),

    #[error("input_folder does not exist: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("input_folder is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("cannot create output folder {}", path.display())]
    CreateOutputRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot create output directory {}", path.display())]
    CreateOutputParent {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// True for errors detected before any job is attempted.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ConvertError::UnsupportedFormat(_)
                | ConvertError::InputNotFound { .. }
                | ConvertError::NotADirectory { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Aggregate counters for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl ConversionSummary {
    pub fn record(&mut self, outcome: &ConversionOutcome) {
        match outcome {
            ConversionOutcome::Converted => self.converted += 1,
            ConversionOutcome::Skipped(_) => self.skipped += 1,
            ConversionOutcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.converted + self.skipped + self.failed
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Converted: {}, Skipped: {}, Failed: {}",
            self.converted, self.skipped, self.failed
        )
    }
}

pub fn validate_input_root(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ConvertError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    if !path.is_dir() {
        return Err(ConvertError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}
