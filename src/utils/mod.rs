// pixconv/src/utils/mod.rs
use std::path::{Path, PathBuf};

/// Maps input files to output files for one run.
#[derive(Debug, Clone)]
pub struct PathMapping {
    pub input_root: PathBuf,
    pub output_root: PathBuf,
    pub extension: String,
    pub recursive: bool,
}

impl PathMapping {
    pub fn new(input_root: &Path, output_root: &Path, extension: &str, recursive: bool) -> Self {
        Self {
            input_root: input_root.to_path_buf(),
            output_root: output_root.to_path_buf(),
            extension: extension.to_string(),
            recursive,
        }
    }

    pub fn map(&self, input_path: &Path) -> PathBuf {
        output_path_for(
            input_path,
            &self.input_root,
            &self.output_root,
            &self.extension,
            self.recursive,
        )
    }
}

/// Recursive mode keeps the path relative to `input_root`; flat mode keeps
/// only the file name. Either way the last extension becomes `extension`.
pub fn output_path_for(
    input_path: &Path,
    input_root: &Path,
    output_root: &Path,
    extension: &str,
    recursive: bool,
) -> PathBuf {
    let relative = if recursive {
        input_path
            .strip_prefix(input_root)
            .ok()
            .filter(|rel| rel.file_name().is_some())
            .map(Path::to_path_buf)
    } else {
        None
    };

    let relative = relative.unwrap_or_else(|| {
        input_path
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_default()
    });

    output_root
        .join(relative)
        .with_extension(extension.trim_start_matches('.'))
}

pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let base = 1024_f64;
    let bytes_f64 = bytes as f64;
    let exponent = ((bytes_f64.log10() / base.log10()).floor() as usize).min(UNITS.len() - 1);
    let size = bytes_f64 / base.powi(exponent as i32);

    format!("{:.2} {}", size, UNITS[exponent])
}
