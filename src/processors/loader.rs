// pixconv/src/processors/loader.rs
use crate::core::FailureReason;
use image::{DynamicImage, ImageError, ImageReader};
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct Loader;

impl Loader {
    pub fn new() -> Self {
        Self
    }

    /// Decodes `path`, sniffing the format from its contents first and
    /// falling back to the extension.
    pub fn load(&self, path: &Path) -> Result<DynamicImage, FailureReason> {
        log::debug!("Loading image from: {}", path.display());

        let reader = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| FailureReason::Io(e.to_string()))?;

        let image = reader.decode().map_err(decode_failure)?;

        log::debug!(
            "Loaded image: {}x{} pixels, color: {:?}",
            image.width(),
            image.height(),
            image.color()
        );

        Ok(image)
    }
}

fn decode_failure(err: ImageError) -> FailureReason {
    match err {
        ImageError::IoError(e) => FailureReason::Io(e.to_string()),
        other => FailureReason::Decode(other.to_string()),
    }
}
