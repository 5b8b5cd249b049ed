//! Color-plane enhancement operators.
//!
//! The pipeline applies three operators to the 3-channel working image in
//! a fixed order: brightness, then contrast, then saturation. Each
//! operator is an independent full-image pass that quantizes back to
//! 8-bit output, so the next stage consumes exactly what the previous
//! stage produced.

use image::RgbImage;
use tracing::debug;

use crate::luminance::gray_level;
use crate::EnhanceSettings;

/// Apply the enhancement chain to the color planes.
pub fn apply(image: &RgbImage, settings: &EnhanceSettings) -> RgbImage {
    debug!(
        brightness = settings.brightness,
        contrast = settings.contrast,
        saturation = settings.saturation,
        "enhancing color planes"
    );
    let image = brightness(image, settings.brightness);
    let image = contrast(&image, settings.contrast);
    saturation(&image, settings.saturation)
}

/// Scale every channel by `factor`.
///
/// 1.0 leaves the image unchanged, larger factors brighten. Results are
/// clamped to [0, 255].
pub fn brightness(image: &RgbImage, factor: f32) -> RgbImage {
    let mut out = image.clone();
    for channel in out.iter_mut() {
        *channel = quantize(*channel as f32 * factor);
    }
    out
}

/// Scale each channel's deviation from the image's mean gray level by
/// `factor`.
///
/// The mean is computed over this operator's own input, so it reflects
/// any earlier stages. 1.0 leaves the image unchanged, 0.0 produces a
/// uniform gray image.
pub fn contrast(image: &RgbImage, factor: f32) -> RgbImage {
    let mean = mean_gray(image);
    let mut out = image.clone();
    for channel in out.iter_mut() {
        *channel = quantize(mean + (*channel as f32 - mean) * factor);
    }
    out
}

/// Scale each channel's distance from the pixel's own gray level by
/// `factor`.
///
/// 0.0 produces grayscale, 1.0 leaves the image unchanged, larger
/// factors push colors away from gray.
pub fn saturation(image: &RgbImage, factor: f32) -> RgbImage {
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        let [r, g, b] = pixel.0;
        let gray = gray_level(r, g, b).round();
        pixel.0 = [
            quantize(gray + (r as f32 - gray) * factor),
            quantize(gray + (g as f32 - gray) * factor),
            quantize(gray + (b as f32 - gray) * factor),
        ];
    }
    out
}

/// Mean gray level of the image, in [0, 255].
fn mean_gray(image: &RgbImage) -> f32 {
    let count = u64::from(image.width()) * u64::from(image.height());
    if count == 0 {
        return 0.0;
    }
    let sum: f64 = image
        .pixels()
        .map(|pixel| {
            let [r, g, b] = pixel.0;
            f64::from(gray_level(r, g, b))
        })
        .sum();
    (sum / count as f64) as f32
}

#[inline]
fn quantize(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}


// ============================================================================
// Property-Based Tests
// ============================================================================
