#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod cli;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let actions = cli.startup_actions()?;

    if let Some(dir) = &cli.export {
        let path = cli::export_headless(&cli, dir, actions)?;
        println!("{}", path.display());
        return Ok(());
    }

    tracing::info!("Starting beautifier");

    let startup_args = beautifier_ui::StartupArgs {
        actions,
        config_path: cli.config.clone(),
        data_dir: None,
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Beautifier",
        native_options,
        Box::new(move |cc| Ok(Box::new(beautifier_ui::App::new(cc, startup_args)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
