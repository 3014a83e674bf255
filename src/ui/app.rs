use eframe::{Frame, egui};
use poll_promise::Promise;
use std::path::PathBuf;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tokio::runtime::Handle;

use crate::analysis::{AlignmentVerdict, evaluate};
use crate::data::{Artifact, ArtifactId, ArtifactSource, ArtifactStore, DownloadError, DownloadSink};
use crate::domain::SignalSnapshot;
use crate::ui::clipboard_feedback::{ClipboardFeedbackController, SystemClipboard};
use crate::ui::utils::setup_custom_visuals;
use crate::ui::view_state::ViewState;
use crate::utils::app_time::AppInstant;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Outcome of the most recent download, shown in the footer.
#[derive(Debug, Clone)]
pub enum DownloadNotice {
    Saved(PathBuf),
    Failed(String),
}

pub struct DashboardApp {
    pub(super) view: ViewState,
    pub(super) snapshot: SignalSnapshot,
    pub(super) artifacts: ArtifactStore,
    pub(super) artifact_promises: Vec<(ArtifactId, Promise<Artifact>)>,
    pub(super) download_promises: Vec<(ArtifactId, Promise<Result<PathBuf, DownloadError>>)>,
    pub(super) downloads: DownloadSink,
    pub(super) feedback: ClipboardFeedbackController,
    pub(super) notice: Option<(AppInstant, DownloadNotice)>,
    pub(super) runtime: Handle,
}

impl DashboardApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        runtime: Handle,
        source: Arc<dyn ArtifactSource>,
        snapshot: SignalSnapshot,
        downloads: DownloadSink,
    ) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let repaint_ctx = cc.egui_ctx.clone();
        let feedback = ClipboardFeedbackController::new(Box::new(SystemClipboard::new()), runtime.clone())
        .with_expiry_hook(Arc::new(move || repaint_ctx.request_repaint()));

        let mut app = Self {
            view: ViewState::default(),
            snapshot,
            artifacts: ArtifactStore::new(source),
            artifact_promises: Vec::new(),
            download_promises: Vec::new(),
            downloads,
            feedback,
            notice: None,
            runtime,
        };

        #[cfg(debug_assertions)]
        log::info!(
            "Dashboard starting: {} assets, artifacts from {}, downloads to {}",
            app.snapshot.assets.len(),
            app.artifacts.source_signature(),
            app.downloads.dir().display()
        );

        app.log_verdicts();

        // Both artifacts are fetched once at startup; later views read the cache.
        for id in ArtifactId::iter() {
            app.start_artifact_load(id);
        }

        app
    }

    /// Verdicts are derived on every call, never stored.
    pub(super) fn verdicts(&self) -> impl Iterator<Item = AlignmentVerdict> + '_ {
        self.snapshot
            .assets
            .iter()
            .map(|asset| evaluate(&asset.signals))
    }

    fn log_verdicts(&self) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_alignment {
            for (asset, verdict) in self.snapshot.assets.iter().zip(self.verdicts()) {
                match verdict.direction {
                    Some(direction) if verdict.aligned => {
                        log::info!("🔥 {}: full {} confluence", asset.asset(), direction)
                    }
                    _ => log::info!("⚖️  {}: mixed ({:?})", asset.asset(), asset.signals.directions()),
                }
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Abandon in-flight work; nothing is waiting on these results any more
        self.artifact_promises.clear();
        self.download_promises.clear();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_artifact_loads(ctx);
        self.poll_downloads(ctx);

        self.render_header_panel(ctx);
        self.render_footer_panel(ctx);
        self.render_central_panel(ctx);
    }
}
