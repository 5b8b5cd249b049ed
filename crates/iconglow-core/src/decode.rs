//! Input decoding with EXIF orientation normalization.
//!
//! Any format the `image` crate can decode is accepted; pixels are
//! normalized to 8-bit RGBA. Inputs without an alpha channel gain a fully
//! opaque plane through the conversion. Inputs carrying an EXIF
//! orientation tag are rotated upright before processing.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use exif::{In, Tag};
use image::{DynamicImage, ImageReader, RgbaImage};
use thiserror::Error;
use tracing::debug;

/// Errors for input decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input path does not exist or cannot be read.
    #[error("Cannot read {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}

/// Load an image file and normalize it to 8-bit RGBA.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, DecodeError> {
    let bytes = fs::read(path).map_err(|source| DecodeError::Unreadable {
        path: path.display().to_string(),
        source,
    })?;
    decode_rgba(&bytes)
}

/// Decode raw image bytes and normalize them to 8-bit RGBA.
pub fn decode_rgba(bytes: &[u8]) -> Result<RgbaImage, DecodeError> {
    let orientation = exif_orientation(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;
    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let image = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let rgba = upright(image, orientation).into_rgba8();
    debug!(
        width = rgba.width(),
        height = rgba.height(),
        orientation,
        "decoded input"
    );
    Ok(rgba)
}

/// EXIF orientation tag value (1-8), or 1 when absent or unreadable.
fn exif_orientation(bytes: &[u8]) -> u32 {
    let mut cursor = Cursor::new(bytes);
    exif::Reader::new()
        .read_from_container(&mut cursor)
        .ok()
        .and_then(|exif| {
            exif.get_field(Tag::Orientation, In::PRIMARY)
                .and_then(|field| field.value.get_uint(0))
        })
        .unwrap_or(1)
}

/// Rotate/flip a decoded image upright per its EXIF orientation value.
fn upright(image: DynamicImage, orientation: u32) -> DynamicImage {
    match orientation {
        2 => image.fliph(),
        3 => image.rotate180(),
        4 => image.flipv(),
        5 => image.rotate90().fliph(),
        6 => image.rotate90(),
        7 => image.rotate270().fliph(),
        8 => image.rotate270(),
        _ => image,
    }
}
