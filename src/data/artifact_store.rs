use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use strum::IntoEnumIterator;

use crate::data::artifact::{Artifact, ArtifactId, ArtifactStatus};
use crate::data::artifact_source::ArtifactSource;
use crate::utils::app_time::now;

/// A retrieval in progress. Every caller asking for the same artifact while it is
/// loading gets a clone of the same future.
pub type ArtifactLoad = Shared<BoxFuture<'static, Artifact>>;

struct Slot {
    artifact: Artifact,
    in_flight: Option<ArtifactLoad>,
}

impl Slot {
    fn new(id: ArtifactId) -> Self {
        Self {
            artifact: Artifact::unloaded(id),
            in_flight: None,
        }
    }
}

/// Retrieves and caches the distributable artifacts.
///
/// Each slot has one writer: the load future that owns the retrieval. Callers read
/// the cached copy synchronously, which may still be `Loading`.
pub struct ArtifactStore {
    source: Arc<dyn ArtifactSource>,
    slots: Arc<Mutex<HashMap<ArtifactId, Slot>>>,
}

impl ArtifactStore {
    pub fn new(source: Arc<dyn ArtifactSource>) -> Self {
        let slots = ArtifactId::iter().map(|id| (id, Slot::new(id))).collect();
        Self {
            source,
            slots: Arc::new(Mutex::new(slots)),
        }
    }

    pub fn source_signature(&self) -> &'static str {
        self.source.signature()
    }

    /// Starts a retrieval, or joins the one already running for `id`.
    ///
    /// The status moves to `Loading` before this returns. Nothing is fetched until the
    /// returned future is polled; once it settles the slot holds either the retrieved
    /// text (`Loaded`) or the placeholder (`Failed`). Calling again after it settled
    /// fetches afresh.
    pub fn load(&self, id: ArtifactId) -> ArtifactLoad {
        let mut slots = self.slots.lock();
        let slot = slots.entry(id).or_insert_with(|| Slot::new(id));

        if slot.artifact.status == ArtifactStatus::Loading {
            if let Some(in_flight) = &slot.in_flight {
                return in_flight.clone();
            }
        }

        slot.artifact.status = ArtifactStatus::Loading;

        let source = Arc::clone(&self.source);
        let store = Arc::clone(&self.slots);
        let load = async move {
            let started = now();
            let result = source.fetch(id.path()).await;
            let elapsed = started.elapsed();

            let artifact = match result {
                Ok(content) => {
                    log::info!(
                        "Loaded {} ({} bytes) from {} in {:.0?}",
                        id,
                        content.len(),
                        source.signature(),
                        elapsed
                    );
                    Artifact::loaded(id, content)
                }
                Err(e) => {
                    log::warn!(
                        "⚠️  Could not load {} after {:.0?}: {}. Using placeholder.",
                        id,
                        elapsed,
                        e
                    );
                    Artifact::failed(id)
                }
            };

            let mut slots = store.lock();
            let slot = slots.entry(id).or_insert_with(|| Slot::new(id));
            slot.artifact = artifact.clone();
            slot.in_flight = None;
            artifact
        }
        .boxed()
        .shared();

        slot.in_flight = Some(load.clone());
        load
    }

    pub fn get_cached(&self, id: ArtifactId) -> Artifact {
        self.slots
            .lock()
            .get(&id)
            .map(|slot| slot.artifact.clone())
            .unwrap_or_else(|| Artifact::unloaded(id))
    }

    #[cfg(test)]
    fn status(&self, id: ArtifactId) -> ArtifactStatus {
        self.slots
            .lock()
            .get(&id)
            .map(|slot| slot.artifact.status)
            .unwrap_or(ArtifactStatus::Unloaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ARTIFACTS;
    use crate::data::artifact_source::ArtifactError;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serves fixed text, or fails every request, and counts how often it was asked.
    struct CountingSource {
        calls: AtomicUsize,
        content: Option<&'static str>,
    }

    impl CountingSource {
        fn serving(content: &'static str) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                content: Some(content),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                content: None,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ArtifactSource for CountingSource {
        async fn fetch(&self, path: &str) -> Result<String, ArtifactError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            match self.content {
                Some(text) => Ok(text.to_string()),
                None => Err(ArtifactError::Io {
                    path: PathBuf::from(path),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                }),
            }
        }

        fn signature(&self) -> &'static str {
            "Counting test source"
        }
    }

    #[test]
    fn artifacts_start_unloaded() {
        let store = ArtifactStore::new(CountingSource::serving("x"));
        for id in ArtifactId::iter() {
            let artifact = store.get_cached(id);
            assert_eq!(artifact.status, ArtifactStatus::Unloaded);
            assert!(artifact.content.is_empty());
        }
    }

    #[tokio::test]
    async fn load_marks_loading_then_loaded() {
        let source = CountingSource::serving("pandas==2.2.0\n");
        let store = ArtifactStore::new(source.clone());

        let load = store.load(ArtifactId::Requirements);
        assert_eq!(store.status(ArtifactId::Requirements), ArtifactStatus::Loading);
        assert_eq!(store.status(ArtifactId::AppScript), ArtifactStatus::Unloaded);

        let artifact = load.await;
        assert_eq!(artifact.status, ArtifactStatus::Loaded);
        assert_eq!(artifact.content, "pandas==2.2.0\n");
        assert_eq!(store.get_cached(ArtifactId::Requirements), artifact);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn concurrent_loads_share_one_retrieval() {
        let source = CountingSource::serving("print('hi')");
        let store = ArtifactStore::new(source.clone());

        let first = store.load(ArtifactId::AppScript);
        let second = store.load(ArtifactId::AppScript);
        let (a, b) = futures::join!(first, second);

        assert_eq!(source.calls(), 1);
        assert_eq!(a, b);
        assert_eq!(a.status, ArtifactStatus::Loaded);
    }

    #[tokio::test]
    async fn failed_retrieval_settles_on_placeholder() {
        let store = ArtifactStore::new(CountingSource::failing());

        let artifact = store.load(ArtifactId::AppScript).await;
        assert_eq!(artifact.status, ArtifactStatus::Failed);

        let cached = store.get_cached(ArtifactId::AppScript);
        assert_eq!(cached.content, ARTIFACTS.placeholder);
        assert_eq!(cached.name(), "app.py");
    }

    #[tokio::test]
    async fn reload_after_settling_fetches_again() {
        let source = CountingSource::failing();
        let store = ArtifactStore::new(source.clone());

        store.load(ArtifactId::Requirements).await;
        store.load(ArtifactId::Requirements).await;

        assert_eq!(source.calls(), 2);
        assert_eq!(store.status(ArtifactId::Requirements), ArtifactStatus::Failed);
    }

    #[tokio::test]
    async fn artifacts_load_independently() {
        let source = CountingSource::serving("text");
        let store = ArtifactStore::new(source.clone());

        let (a, b) = futures::join!(
            store.load(ArtifactId::AppScript),
            store.load(ArtifactId::Requirements)
        );

        assert_eq!(source.calls(), 2);
        assert_eq!(a.id, ArtifactId::AppScript);
        assert_eq!(b.id, ArtifactId::Requirements);
    }

    #[tokio::test]
    async fn retry_hides_placeholder_until_settled() {
        let store = ArtifactStore::new(CountingSource::failing());
        store.load(ArtifactId::AppScript).await;
        assert!(store.get_cached(ArtifactId::AppScript).is_ready());

        let retry = store.load(ArtifactId::AppScript);
        let cached = store.get_cached(ArtifactId::AppScript);
        assert_eq!(cached.status, ArtifactStatus::Loading);
        assert!(!cached.is_ready());

        retry.await;
        assert!(store.get_cached(ArtifactId::AppScript).is_ready());
    }
}
