//! Glow layer rendering.
//!
//! The glow is a Gaussian-blurred duplicate of the enhanced image,
//! composited beneath it to simulate light bloom. Blurring all four
//! channels spreads both color and opacity past the icon's edges, which
//! is what produces the glow spill around partially transparent pixels.

use image::{imageops, RgbaImage};
use tracing::debug;

/// Render the glow layer: a deep copy of `image` blurred with standard
/// deviation `sigma`, in pixels.
///
/// Dimensions are preserved. A non-positive sigma returns an unblurred
/// copy.
pub fn render(image: &RgbaImage, sigma: f32) -> RgbaImage {
    if sigma <= 0.0 {
        return image.clone();
    }
    debug!(sigma, "rendering glow layer");
    imageops::blur(image, sigma)
}
