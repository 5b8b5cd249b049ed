//! Iconglow Core - icon enhancement library
//!
//! This crate implements the brighten-and-glow pipeline for icon assets:
//! decode an input image to 8-bit RGBA, enhance the color planes
//! (brightness, contrast, saturation) while the alpha plane is set aside,
//! then composite the sharp result over a Gaussian-blurred duplicate of
//! itself (the glow layer) and encode a compression-optimized PNG.

pub mod channels;
pub mod composite;
pub mod decode;
pub mod encode;
pub mod enhance;
pub mod glow;
pub mod luminance;
pub mod pipeline;

pub use channels::ChannelError;
pub use decode::{decode_rgba, load_rgba, DecodeError};
pub use encode::{encode_png, write_png, EncodeError};
pub use pipeline::{brighten, brighten_image, enhance_layer, PipelineError, Report};

/// Settings for the brighten pipeline.
///
/// The defaults are the fixed parameters the `iconglow` tool runs with;
/// [`EnhanceSettings::identity`] leaves every pixel untouched and is
/// mostly useful in tests.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EnhanceSettings {
    /// Brightness scale (1.0 = unchanged, >1.0 = brighter)
    pub brightness: f32,
    /// Contrast scale around the image's mean gray level (1.0 = unchanged)
    pub contrast: f32,
    /// Saturation scale away from each pixel's own gray level
    /// (0.0 = grayscale, 1.0 = unchanged)
    pub saturation: f32,
    /// Standard deviation of the glow blur, in pixels
    pub glow_sigma: f32,
}

impl Default for EnhanceSettings {
    fn default() -> Self {
        Self {
            brightness: 1.4,
            contrast: 1.3,
            saturation: 1.5,
            glow_sigma: 4.0,
        }
    }
}

impl EnhanceSettings {
    /// Settings that reproduce the input image exactly: no enhancement
    /// and a glow layer identical to the sharp layer.
    pub fn identity() -> Self {
        Self {
            brightness: 1.0,
            contrast: 1.0,
            saturation: 1.0,
            glow_sigma: 0.0,
        }
    }

    /// Check whether these settings are the identity settings.
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}
