use eframe::egui;
use poll_promise::Promise;
use std::time::Duration;

use crate::data::ArtifactId;
use crate::ui::app::{DashboardApp, DownloadNotice};
use crate::utils::app_time::now;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// How often to check on background work while any is outstanding.
const PENDING_POLL_INTERVAL: Duration = Duration::from_millis(100);

impl DashboardApp {
    /// Hands the store's shared load to the runtime and tracks it until settled.
    /// A second request for the same artifact while one is pending is a no-op.
    pub(super) fn start_artifact_load(&mut self, id: ArtifactId) {
        if self.artifact_promises.iter().any(|(pending, _)| *pending == id) {
            return;
        }

        let load = self.artifacts.load(id);
        let _guard = self.runtime.enter();
        self.artifact_promises.push((id, Promise::spawn_async(load)));
    }

    /// Downloads snapshot the content now; the file write runs off the UI thread.
    /// Ignored until the artifact has settled.
    pub(super) fn start_download(&mut self, id: ArtifactId) {
        let artifact = self.artifacts.get_cached(id);
        if !artifact.is_ready() {
            return;
        }
        let sink = self.downloads.clone();

        let _guard = self.runtime.enter();
        let promise = Promise::spawn_blocking(move || sink.save(&artifact.content, artifact.name()));
        self.download_promises.push((id, promise));
    }

    pub(super) fn poll_artifact_loads(&mut self, ctx: &egui::Context) {
        self.artifact_promises.retain(|(_id, promise)| match promise.ready() {
            Some(_artifact) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_artifact_loads {
                    log::info!("{} settled as {:?}", _id, _artifact.status);
                }
                false
            }
            None => true,
        });

        if !self.artifact_promises.is_empty() {
            ctx.request_repaint_after(PENDING_POLL_INTERVAL);
        }
    }

    pub(super) fn poll_downloads(&mut self, ctx: &egui::Context) {
        let mut finished = Vec::new();
        self.download_promises.retain(|(id, promise)| match promise.ready() {
            Some(result) => {
                let notice = match result {
                    Ok(path) => DownloadNotice::Saved(path.clone()),
                    Err(e) => {
                        log::error!("❌ Download of {} failed: {}", id, e);
                        DownloadNotice::Failed(e.to_string())
                    }
                };
                finished.push(notice);
                false
            }
            None => true,
        });

        if let Some(notice) = finished.pop() {
            self.notice = Some((now(), notice));
        }

        if !self.download_promises.is_empty() {
            ctx.request_repaint_after(PENDING_POLL_INTERVAL);
        }
    }

    pub(super) fn is_loading(&self) -> bool {
        !self.artifact_promises.is_empty()
    }
}
