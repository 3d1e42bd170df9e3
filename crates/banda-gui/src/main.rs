//! Banda equalizer editor — standalone preview shell.

use banda_gui::BandaApp;
use clap::Parser;
use eframe::egui;

/// Banda equalizer preview.
#[derive(Parser, Debug)]
#[command(name = "banda-gui")]
#[command(about = "Multi-band parametric EQ editor preview")]
#[command(version)]
struct Args {
    /// Number of equalizer bands.
    #[arg(long, default_value_t = banda_core::DEFAULT_BAND_COUNT)]
    bands: usize,
}

fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    // Initialize tracing subscriber; bridge legacy log:: calls from eframe/egui
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    tracing_log::LogTracer::init().ok();

    let args = Args::parse();
    tracing::info!(bands = args.bands, "starting Banda preview");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([840.0, 500.0])
            .with_min_inner_size([560.0, 360.0])
            .with_title("Banda"),
        ..Default::default()
    };

    let bands = args.bands;
    eframe::run_native(
        "Banda",
        options,
        Box::new(move |cc| Ok(Box::new(BandaApp::new(cc, bands)))),
    )
}
