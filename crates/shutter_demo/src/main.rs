//! Shutter Demo
//!
//! Headless preview of the camera button: taps it on a schedule, runs a
//! simulated shutter for each click, and logs the frames.
//!
//! Run with: `RUST_LOG=shutter_widgets=debug,shutter_demo=trace cargo run -p shutter_demo -- --click-at-ms 300`

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use shutter_core::Size;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod preview;
mod shutter;
mod style;

use preview::PreviewOptions;
use style::StyleFile;

#[derive(Parser, Debug)]
#[command(name = "shutter-demo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Headless camera shutter button preview", long_about = None)]
struct Cli {
    /// Total preview time in milliseconds
    #[arg(long, default_value_t = 3000)]
    duration_ms: u64,

    /// Frames per second
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,

    /// How long a capture keeps the button in the shooting state
    #[arg(long, default_value_t = 800)]
    shutter_ms: u64,

    /// Start a tap at this offset (repeatable)
    #[arg(long = "click-at-ms", default_values_t = [300u64, 1600])]
    click_at_ms: Vec<u64>,

    /// TOML file overriding the default look
    #[arg(long)]
    style: Option<PathBuf>,

    /// Viewport edge length in logical pixels
    #[arg(long, default_value_t = 200.0)]
    viewport: f32,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let style = match cli.style {
        Some(ref path) => {
            tracing::info!(path = %path.display(), "loading style");
            StyleFile::load(path)?
        }
        None => StyleFile::default(),
    };
    let config = style.to_config()?;

    let options = PreviewOptions {
        viewport: Size::square(cli.viewport),
        fps: cli.fps,
        duration: Duration::from_millis(cli.duration_ms),
        shutter: Duration::from_millis(cli.shutter_ms),
        taps: cli
            .click_at_ms
            .iter()
            .copied()
            .map(Duration::from_millis)
            .collect(),
    };

    let summary = preview::run(config, options).await?;
    println!(
        "{} frames, {} animated, {} clicks",
        summary.frames, summary.animated_frames, summary.clicks
    );
    Ok(())
}
