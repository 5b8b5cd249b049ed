//! Alpha compositing of the sharp enhanced image over its glow layer.
//!
//! Standard "over" blending with the enhanced image as the foreground and
//! the glow as the background. Channel arithmetic happens in normalized
//! [0, 1] space and quantizes back to 8 bits on storage.

use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::channels::ChannelError;

/// Composite `fg` over `bg`.
///
/// Both layers may carry non-uniform per-pixel alpha. The layers must
/// have identical dimensions.
pub fn over(fg: &RgbaImage, bg: &RgbaImage) -> Result<RgbaImage, ChannelError> {
    let (width, height) = fg.dimensions();
    if bg.dimensions() != (width, height) {
        let (actual_width, actual_height) = bg.dimensions();
        return Err(ChannelError::DimensionMismatch {
            expected_width: width,
            expected_height: height,
            actual_width,
            actual_height,
        });
    }

    debug!(width, height, "compositing foreground over glow");
    let mut out = RgbaImage::new(width, height);
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        *pixel = over_pixel(*fg.get_pixel(x, y), *bg.get_pixel(x, y));
    }
    Ok(out)
}

/// Blend a single foreground pixel over a background pixel.
///
/// `outC = fgC * fgA + bgC * bgA * (1 - fgA)` and
/// `outA = fgA + bgA * (1 - fgA)`. A fully opaque foreground pixel
/// passes through unchanged.
#[inline]
pub fn over_pixel(fg: Rgba<u8>, bg: Rgba<u8>) -> Rgba<u8> {
    let fg_a = f32::from(fg.0[3]) / 255.0;
    let bg_a = f32::from(bg.0[3]) / 255.0;

    let blend = |f: u8, b: u8| {
        let f = f32::from(f) / 255.0;
        let b = f32::from(b) / 255.0;
        quantize(f * fg_a + b * bg_a * (1.0 - fg_a))
    };

    Rgba([
        blend(fg.0[0], bg.0[0]),
        blend(fg.0[1], bg.0[1]),
        blend(fg.0[2], bg.0[2]),
        quantize(fg_a + bg_a * (1.0 - fg_a)),
    ])
}

#[inline]
fn quantize(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}


// ============================================================================
// Property-Based Tests
// ============================================================================
