mod cli;
mod core;
mod processors;
mod reporting;
mod utils;

pub use crate::cli::Cli;
pub use crate::core::{
    convert_folder, resolve, ConversionEvent, ConversionJob, ConversionOutcome,
    ConversionSummary, ConvertConfig, ConvertError, EventSink, FailureReason, FolderConverter,
    OutputFormat, Result, SkipReason,
};
pub use crate::processors::{prepare_for, Encoder, Loader, Walker};
pub use crate::reporting::{LogSink, ProgressSink};
pub use crate::utils::{format_file_size, output_path_for, PathMapping};

pub mod prelude {
    pub use crate::{
        convert_folder, resolve, ConversionEvent, ConversionSummary, ConvertConfig,
        EventSink, FolderConverter, OutputFormat,
    };
}

// Re-export commonly used types
pub use image::DynamicImage;
