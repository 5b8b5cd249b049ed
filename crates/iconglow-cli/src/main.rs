//! iconglow - brighten an icon and give it a soft glow.
//!
//! One-shot utility intended to be run by a developer or an asset
//! pipeline: decodes the input icon, applies the fixed brightness /
//! contrast / saturation enhancement, composites a Gaussian-blurred glow
//! layer beneath the sharp result, and writes an optimized RGBA PNG.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use iconglow_core::{brighten, EnhanceSettings, Report};

#[derive(Parser)]
#[command(name = "iconglow")]
#[command(version, about = "Brighten an icon and give it a soft glow")]
#[command(long_about = "
Brightens an icon for better visibility: boosts brightness, contrast and
saturation of the color planes while keeping the original transparency,
then composites a Gaussian-blurred glow layer underneath the sharp image.

Examples:
  iconglow notext.png                        # writes notext-bright.png
  iconglow notext.png assets/notext-glow.png
")]
struct Cli {
    /// Input icon (any image decodable to 8-bit RGBA)
    input: PathBuf,

    /// Output PNG path [default: <input stem>-bright.png]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Default output path next to the input: `notext.png` -> `notext-bright.png`.
fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "icon".to_string());
    input.with_file_name(format!("{stem}-bright.png"))
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<Report> {
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output(&cli.input));
    let settings = EnhanceSettings::default();

    brighten(&cli.input, &output, &settings)
        .with_context(|| format!("failed to brighten {}", cli.input.display()))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(report) => {
            let settings = EnhanceSettings::default();
            println!(
                "[SUCCESS] Brightened icon saved to: {}",
                report.output.display()
            );
            println!("   - Brightness: {:.1}x (subtle)", settings.brightness);
            println!("   - Contrast: {:.1}x", settings.contrast);
            println!("   - Saturation: {:.1}x", settings.saturation);
            println!(
                "   - Glow: {:.0}px Gaussian blur (subtle)",
                settings.glow_sigma
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("[ERROR] {err:#}");
            ExitCode::FAILURE
        }
    }
}
