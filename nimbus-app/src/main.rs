//! Nimbus Application
//!
//! Headless harness for the gesture-driven morphing point cloud.
//!
//! Runs the full pipeline: a scripted gesture source feeding the signal
//! slot from a detection thread, and a render-rate loop morphing the
//! particle buffer and emitting instance records. An actual renderer would
//! consume the per-frame instance slice; this binary reports the same data
//! through tracing instead.

mod app;
mod preset;

use clap::Parser;
use std::path::PathBuf;

/// Nimbus - gesture-driven morphing point cloud
#[derive(Parser, Debug)]
#[command(name = "nimbus")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Initial shape (heart, flower, saturn, meditate, fireworks, sphere)
    #[arg(short, long, default_value = "sphere")]
    shape: String,

    /// Particle color as a hex string
    #[arg(long, default_value = "#ff6b9d")]
    color: String,

    /// Number of particles
    #[arg(short = 'n', long, default_value_t = 6000)]
    count: usize,

    /// Seconds to run
    #[arg(short, long, default_value_t = 12.0)]
    duration: f32,

    /// Render loop rate in Hz
    #[arg(long, default_value_t = 60.0)]
    fps: f32,

    /// Detection loop rate in Hz
    #[arg(long, default_value_t = 30.0)]
    detection_fps: f32,

    /// Cycle through all shapes during the run
    #[arg(long)]
    cycle: bool,

    /// Path to a JSON scene preset (overrides shape/color/count)
    #[arg(long)]
    scene: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if let Err(e) = app::run(args) {
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}
