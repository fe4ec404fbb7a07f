#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use anyhow::{anyhow, Result};
use eframe::egui;
use tracing_subscriber::EnvFilter;

use panahsc_store::config::Config;
use panahsc_store::controller::ViewController;
use panahsc_store::seed::SeedData;
use panahsc_store::ui::App;
use panahsc_store::Icons;

fn main() -> Result<()> {
    // Log to stdout (if you run with `RUST_LOG=debug`).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!("{:?}", config);

    let seed = SeedData::load(config.seed_path.as_deref())?;
    tracing::info!(
        "{} products, {} notifications",
        seed.products.len(),
        seed.notifications.len()
    );

    let controller = ViewController::new(seed);
    let icons = Icons::load()?;

    let (width, height) = config.window_size;
    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(width, height)),
        min_window_size: Some(egui::vec2(320.0, 560.0)),

        #[cfg(feature = "wgpu")]
        renderer: eframe::Renderer::Wgpu,

        ..Default::default()
    };
    eframe::run_native(
        "Panahsc",
        options,
        Box::new(|cc| Box::new(App::new(cc, controller, icons))),
    )
    .map_err(|e| anyhow!("{e}"))?;

    Ok(())
}
