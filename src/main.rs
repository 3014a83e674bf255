#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use anyhow::{Context, anyhow};
use clap::Parser;
use eframe::{NativeOptions, egui};
use tokio::runtime::Runtime;

use confluence_dashboard::{
    Cli,          // The struct from lib.rs
    DownloadSink, // Where "Download" writes files
    run_app,      // The function from lib.rs
    snapshot_or_demo,
};
use confluence_dashboard::ui::config::UI_TEXT;

fn main() -> anyhow::Result<()> {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Runtime for artifact loads, downloads and clipboard timers.
    // The guard keeps it current on the UI thread for the app's lifetime.
    let rt = Runtime::new().context("Failed to create Tokio runtime")?;
    let _guard = rt.enter();

    // D. Inputs that must exist before the first frame
    let source = args.artifact_source()?;
    let snapshot = snapshot_or_demo(args.signals.as_deref());
    let downloads = DownloadSink::new(&args.download_dir);
    let handle = rt.handle().clone();

    // E. Run Native App
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(UI_TEXT.window_title)
            .with_inner_size([1200.0, 900.0]),
        ..Default::default()
    };

    eframe::run_native(
        UI_TEXT.window_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, handle, source, snapshot, downloads))),
    )
    .map_err(|e| anyhow!("{e}"))
}
