//! PNG encoding for the final composited icon.
//!
//! Output is always RGBA, 8 bits per channel, encoded with the `image`
//! crate's PNG encoder using best compression and adaptive filtering.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while encoding or writing the output PNG.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),

    /// The output path cannot be written
    #[error("Cannot write {path}: {source}")]
    Unwritable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Encode an RGBA image to compression-optimized PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let mut buffer = Cursor::new(Vec::new());
    let encoder =
        PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, FilterType::Adaptive);
    encoder
        .write_image(image.as_raw(), width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    debug!(width, height, bytes = buffer.get_ref().len(), "encoded PNG");
    Ok(buffer.into_inner())
}

/// Encode an RGBA image and write it to `path`, creating or overwriting
/// the file.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<(), EncodeError> {
    let bytes = encode_png(image)?;
    fs::write(path, bytes).map_err(|source| EncodeError::Unwritable {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_rgba;
    use image::Rgba;

    const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    fn sample_image() -> RgbaImage {
        RgbaImage::from_fn(10, 6, |x, y| {
            Rgba([(x * 25) as u8, (y * 40) as u8, 128, 255 - (x * 20) as u8])
        })
    }

    #[test]
    fn test_encode_png_signature() {
        let bytes = encode_png(&sample_image()).unwrap();
        assert_eq!(&bytes[0..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_round_trip_is_lossless() {
        let image = sample_image();
        let bytes = encode_png(&image).unwrap();
        let decoded = decode_rgba(&bytes).unwrap();
        assert_eq!(decoded, image);
    }

    #[test]
    fn test_encode_zero_width() {
        let image = RgbaImage::new(0, 10);
        let result = encode_png(&image);
        assert!(matches!(
            result,
            Err(EncodeError::InvalidDimensions {
                width: 0,
                height: 10
            })
        ));
    }

    #[test]
    fn test_encode_zero_height() {
        let image = RgbaImage::new(10, 0);
        assert!(matches!(
            encode_png(&image),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_encode_single_pixel() {
        let image = RgbaImage::from_pixel(1, 1, Rgba([0, 150, 255, 255]));
        let bytes = encode_png(&image).unwrap();
        assert_eq!(decode_rgba(&bytes).unwrap(), image);
    }

    #[test]
    fn test_write_png_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");

        write_png(&sample_image(), &path).unwrap();
        assert!(path.exists());

        let decoded = decode_rgba(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(decoded, sample_image());
    }

    #[test]
    fn test_write_png_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        fs::write(&path, b"stale").unwrap();

        write_png(&sample_image(), &path).unwrap();
        let decoded = decode_rgba(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(decoded.dimensions(), (10, 6));
    }

    #[test]
    fn test_write_png_unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-subdir").join("icon.png");

        let result = write_png(&sample_image(), &path);
        assert!(matches!(result, Err(EncodeError::Unwritable { .. })));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
