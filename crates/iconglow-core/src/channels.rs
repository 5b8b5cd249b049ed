//! Channel isolation for alpha-preserving enhancement.
//!
//! Enhancement operates on the color planes as an opaque 3-channel image
//! while the alpha plane is set aside, then the original alpha is
//! re-attached to the enhanced result.

use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use thiserror::Error;

/// Errors for plane split/merge operations.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// Two planes that must be combined have different dimensions.
    #[error(
        "Dimension mismatch: expected {expected_width}x{expected_height}, \
         got {actual_width}x{actual_height}"
    )]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },
}

/// Split an RGBA image into a 3-channel working image and its alpha plane.
///
/// The returned alpha plane is bit-identical to the input's alpha channel.
pub fn split_alpha(image: &RgbaImage) -> (RgbImage, GrayImage) {
    let (width, height) = image.dimensions();
    let mut rgb = RgbImage::new(width, height);
    let mut alpha = GrayImage::new(width, height);
    for (x, y, pixel) in image.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        rgb.put_pixel(x, y, Rgb([r, g, b]));
        alpha.put_pixel(x, y, Luma([a]));
    }
    (rgb, alpha)
}

/// Re-attach an alpha plane to a 3-channel image.
pub fn merge_alpha(rgb: &RgbImage, alpha: &GrayImage) -> Result<RgbaImage, ChannelError> {
    let (width, height) = rgb.dimensions();
    if alpha.dimensions() != (width, height) {
        let (actual_width, actual_height) = alpha.dimensions();
        return Err(ChannelError::DimensionMismatch {
            expected_width: width,
            expected_height: height,
            actual_width,
            actual_height,
        });
    }

    let mut rgba = RgbaImage::new(width, height);
    for (x, y, pixel) in rgba.enumerate_pixels_mut() {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        let [a] = alpha.get_pixel(x, y).0;
        *pixel = Rgba([r, g, b, a]);
    }
    Ok(rgba)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rgba() -> RgbaImage {
        RgbaImage::from_fn(3, 2, |x, y| {
            Rgba([
                (x * 50) as u8,
                (y * 100) as u8,
                200,
                (x * 80 + y * 40) as u8,
            ])
        })
    }

    #[test]
    fn test_split_preserves_dimensions() {
        let image = sample_rgba();
        let (rgb, alpha) = split_alpha(&image);
        assert_eq!(rgb.dimensions(), (3, 2));
        assert_eq!(alpha.dimensions(), (3, 2));
    }

    #[test]
    fn test_split_extracts_exact_planes() {
        let image = sample_rgba();
        let (rgb, alpha) = split_alpha(&image);
        for (x, y, pixel) in image.enumerate_pixels() {
            let [r, g, b, a] = pixel.0;
            assert_eq!(rgb.get_pixel(x, y).0, [r, g, b]);
            assert_eq!(alpha.get_pixel(x, y).0, [a]);
        }
    }

    #[test]
    fn test_split_merge_round_trip() {
        let image = sample_rgba();
        let (rgb, alpha) = split_alpha(&image);
        let merged = merge_alpha(&rgb, &alpha).unwrap();
        assert_eq!(merged, image);
    }

    #[test]
    fn test_merge_rejects_mismatched_planes() {
        let rgb = RgbImage::new(4, 4);
        let alpha = GrayImage::new(3, 4);
        let result = merge_alpha(&rgb, &alpha);
        assert!(matches!(
            result,
            Err(ChannelError::DimensionMismatch {
                expected_width: 4,
                expected_height: 4,
                actual_width: 3,
                actual_height: 4,
            })
        ));
    }

    #[test]
    fn test_merge_attaches_given_alpha() {
        let rgb = RgbImage::from_pixel(2, 2, Rgb([10, 20, 30]));
        let alpha = GrayImage::from_pixel(2, 2, Luma([77]));
        let merged = merge_alpha(&rgb, &alpha).unwrap();
        for pixel in merged.pixels() {
            assert_eq!(pixel.0, [10, 20, 30, 77]);
        }
    }
}
