// pixconv/src/processors/encoder.rs
use crate::core::{FailureReason, OutputFormat};
use crate::utils::format_file_size;
use image::{ColorType, DynamicImage, ImageError};
use std::borrow::Cow;
use std::io::Cursor;
use std::path::Path;

#[derive(Debug, Clone, Copy)]
pub struct Encoder {
    format: OutputFormat,
}

impl Encoder {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Encodes in memory and writes the file only once encoding succeeded.
    pub fn save(&self, image: &DynamicImage, path: &Path) -> Result<(), FailureReason> {
        let data = self.encode_to_bytes(image)?;
        std::fs::write(path, &data).map_err(|e| FailureReason::Io(e.to_string()))?;

        log::debug!(
            "Saved {} image: {} ({})",
            self.format,
            path.display(),
            format_file_size(data.len() as u64)
        );

        Ok(())
    }

    pub fn encode_to_bytes(&self, image: &DynamicImage) -> Result<Vec<u8>, FailureReason> {
        let prepared = prepare_for(image, self.format);
        let mut buffer = Cursor::new(Vec::new());

        prepared
            .write_to(&mut buffer, self.format.image_format())
            .map_err(encode_failure)?;

        Ok(buffer.into_inner())
    }
}

/// Converts the color mode when the target encoder cannot take it as is.
/// JPEG has no alpha channel, so anything other than RGB or grayscale is
/// flattened to RGB.
pub fn prepare_for(image: &DynamicImage, format: OutputFormat) -> Cow<'_, DynamicImage> {
    let color = image.color();

    match format {
        OutputFormat::Jpeg => match color {
            ColorType::Rgb8 | ColorType::L8 => Cow::Borrowed(image),
            _ => {
                log::debug!("Converting {:?} to Rgb8 for JPEG", color);
                Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8()))
            }
        },
        OutputFormat::WebP => match color {
            ColorType::Rgb8 | ColorType::Rgba8 => Cow::Borrowed(image),
            _ if color.has_alpha() => Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8())),
            _ => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
        },
        OutputFormat::Png => match color {
            ColorType::Rgb32F => Cow::Owned(DynamicImage::ImageRgb16(image.to_rgb16())),
            ColorType::Rgba32F => Cow::Owned(DynamicImage::ImageRgba16(image.to_rgba16())),
            _ => Cow::Borrowed(image),
        },
    }
}

fn encode_failure(err: ImageError) -> FailureReason {
    match err {
        ImageError::IoError(e) => FailureReason::Io(e.to_string()),
        other => FailureReason::Encode(other.to_string()),
    }
}
