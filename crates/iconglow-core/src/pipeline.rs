//! The brighten pipeline: decode, enhance, glow, composite, write.
//!
//! The pipeline is a fixed, non-branching sequence. Dimensions are
//! preserved at every step, the alpha plane is never touched by the
//! color enhancement, and no output file is created unless every stage
//! before the final write succeeded.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::channels::{merge_alpha, split_alpha, ChannelError};
use crate::composite::over;
use crate::decode::{load_rgba, DecodeError};
use crate::encode::{write_png, EncodeError};
use crate::enhance;
use crate::glow;
use crate::EnhanceSettings;

/// Errors from any stage of the brighten pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Channel(#[from] ChannelError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Summary of a completed run, for the caller's success report.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Where the brightened icon was written.
    pub output: PathBuf,
    /// Output width in pixels, equal to the input width.
    pub width: u32,
    /// Output height in pixels, equal to the input height.
    pub height: u32,
}

/// Run the full pipeline: load `input`, enhance it, render and composite
/// the glow, and write the result to `output` as an optimized PNG.
pub fn brighten(
    input: &Path,
    output: &Path,
    settings: &EnhanceSettings,
) -> Result<Report, PipelineError> {
    let source = load_rgba(input)?;
    let (width, height) = source.dimensions();
    debug!(input = %input.display(), width, height, "loaded icon");

    let composited = brighten_image(&source, settings)?;
    write_png(&composited, output)?;
    debug!(output = %output.display(), "wrote brightened icon");

    Ok(Report {
        output: output.to_path_buf(),
        width,
        height,
    })
}

/// In-memory pipeline body: enhance the color planes, re-attach the
/// original alpha, and composite the sharp result over its glow layer.
pub fn brighten_image(
    image: &RgbaImage,
    settings: &EnhanceSettings,
) -> Result<RgbaImage, ChannelError> {
    let enhanced = enhance_layer(image, settings)?;
    let glow = glow::render(&enhanced, settings.glow_sigma);
    over(&enhanced, &glow)
}

/// The sharp enhanced layer: color planes enhanced, original alpha plane
/// re-attached.
pub fn enhance_layer(
    image: &RgbaImage,
    settings: &EnhanceSettings,
) -> Result<RgbaImage, ChannelError> {
    let (rgb, alpha) = split_alpha(image);
    let enhanced = enhance::apply(&rgb, settings);
    merge_alpha(&enhanced, &alpha)
}
