#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use analysis::{AlignmentVerdict, evaluate};
pub use data::{Artifact, ArtifactId, ArtifactSource, ArtifactStore, DownloadSink, snapshot_or_demo};
pub use domain::{AssetId, AssetSignalSet, Direction, SignalSnapshot, Timeframe};
pub use ui::DashboardApp;
pub use utils::app_time;

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Handle;

use crate::config::ARTIFACTS;
use crate::data::{DirArtifactSource, HttpArtifactSource};

// CLI argument parsing
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Origin serving /app.py and /requirements.txt
    #[arg(long, default_value = ARTIFACTS.default_origin)]
    pub origin: String,

    /// Read the artifacts from this directory instead of the origin
    #[arg(long)]
    pub artifact_dir: Option<PathBuf>,

    /// Signal snapshot (JSON) written by the forecasting pipeline. Demo values are shown without one.
    #[arg(long)]
    pub signals: Option<PathBuf>,

    /// Directory that downloaded artifacts are saved into
    #[arg(long, default_value = ".")]
    pub download_dir: PathBuf,
}

impl Cli {
    /// A local directory wins over the HTTP origin when both are given.
    pub fn artifact_source(&self) -> anyhow::Result<Arc<dyn ArtifactSource>> {
        let source: Arc<dyn ArtifactSource> = match &self.artifact_dir {
            Some(dir) => Arc::new(DirArtifactSource::new(dir)),
            None => Arc::new(HttpArtifactSource::new(self.origin.clone())?),
        };
        Ok(source)
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    runtime: Handle,
    source: Arc<dyn ArtifactSource>,
    snapshot: SignalSnapshot,
    downloads: DownloadSink,
) -> Box<dyn eframe::App> {
    let app = ui::DashboardApp::new(cc, runtime, source, snapshot, downloads);
    Box::new(app)
}
