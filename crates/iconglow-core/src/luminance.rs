//! Gray-level conversion using ITU-R BT.601 luma coefficients.
//!
//! Contrast enhancement measures pixels against the image's mean gray
//! level and saturation enhancement against each pixel's own gray level;
//! this module provides the shared conversion.

/// ITU-R BT.601 coefficient for the red channel.
pub const LUMA_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for the green channel.
pub const LUMA_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for the blue channel.
pub const LUMA_B: f32 = 0.114;

/// Gray-level equivalent of an 8-bit RGB triple, as f32 in [0, 255].
#[inline]
pub fn gray_level(r: u8, g: u8, b: u8) -> f32 {
    LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32
}

/// Gray-level equivalent of an 8-bit RGB triple, rounded to u8.
#[inline]
pub fn gray_level_u8(r: u8, g: u8, b: u8) -> u8 {
    gray_level(r, g, b).round().clamp(0.0, 255.0) as u8
}
