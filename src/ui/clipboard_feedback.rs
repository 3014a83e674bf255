use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::FEEDBACK;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
    #[error("system clipboard unavailable: {0}")]
    System(#[from] arboard::Error),
}

/// Anything that can put text on the system clipboard.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Writes straight to the platform clipboard so a refused write is reported back.
/// The handle is opened on first use and kept, since some platforms only serve the
/// copied text while it is alive.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()?,
        };
        let result = clipboard.set_text(text.to_owned());
        self.clipboard = Some(clipboard);
        Ok(result?)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClipboardState {
    pub active_id: Option<String>,
    pub expires_at: Option<Instant>,
}

#[derive(Default)]
struct FeedbackInner {
    state: ClipboardState,
    /// Bumped on every successful copy; an expiry only clears its own generation.
    generation: u64,
}

/// Runs after the feedback clears (e.g. to request a repaint).
pub type ExpiryHook = Arc<dyn Fn() + Send + Sync>;

/// Tracks which copy button should show "Copied!".
///
/// Idle until a successful copy, then Active(id) until the expiry task fires. A newer
/// copy aborts the pending expiry before arming its own, so only the most recent id
/// is ever shown and an old timer can never clear it.
pub struct ClipboardFeedbackController {
    writer: Box<dyn ClipboardWriter>,
    inner: Arc<Mutex<FeedbackInner>>,
    pending_expiry: Option<JoinHandle<()>>,
    duration: Duration,
    runtime: Handle,
    on_expire: Option<ExpiryHook>,
}

impl ClipboardFeedbackController {
    pub fn new(writer: Box<dyn ClipboardWriter>, runtime: Handle) -> Self {
        Self {
            writer,
            inner: Arc::new(Mutex::new(FeedbackInner::default())),
            pending_expiry: None,
            duration: FEEDBACK.copy_feedback(),
            runtime,
            on_expire: None,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_expiry_hook(mut self, hook: ExpiryHook) -> Self {
        self.on_expire = Some(hook);
        self
    }

    /// Writes `text` to the clipboard and shows feedback for `id`.
    ///
    /// If the write fails nothing changes: any feedback already showing stays, with
    /// its original expiry.
    pub fn copy(&mut self, text: &str, id: impl Into<String>) -> Result<(), ClipboardError> {
        let id = id.into();

        if let Err(e) = self.writer.write_text(text) {
            log::warn!("⚠️  Copy of '{}' failed: {}", id, e);
            return Err(e);
        }

        if let Some(previous) = self.pending_expiry.take() {
            previous.abort();
        }

        let expires_at = Instant::now() + self.duration;
        let generation = {
            let mut inner = self.inner.lock();
            inner.generation += 1;
            inner.state = ClipboardState {
                active_id: Some(id.clone()),
                expires_at: Some(expires_at),
            };
            inner.generation
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_clipboard_events {
            log::info!("📋 Copied '{}' ({} bytes), feedback armed", id, text.len());
        }

        let inner = Arc::clone(&self.inner);
        let hook = self.on_expire.clone();
        self.pending_expiry = Some(self.runtime.spawn(async move {
            tokio::time::sleep_until(expires_at).await;

            let cleared = {
                let mut inner = inner.lock();
                if inner.generation == generation {
                    inner.state = ClipboardState::default();
                    true
                } else {
                    false
                }
            };

            if cleared {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_clipboard_events {
                    log::info!("📋 Feedback for '{}' expired", id);
                }
                if let Some(hook) = hook {
                    hook();
                }
            }
        }));

        Ok(())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.state().active_id.as_deref() == Some(id)
    }

    /// Feedback past its deadline reads as idle even if the expiry task has not run yet.
    pub fn state(&self) -> ClipboardState {
        let state = self.inner.lock().state.clone();
        match state.expires_at {
            Some(at) if at <= Instant::now() => ClipboardState::default(),
            _ => state,
        }
    }

    /// Time left before the current feedback clears.
    #[cfg(test)]
    fn remaining(&self) -> Option<Duration> {
        self.inner
            .lock()
            .state
            .expires_at
            .map(|at| at.saturating_duration_since(Instant::now()))
    }
}

impl Drop for ClipboardFeedbackController {
    fn drop(&mut self) {
        if let Some(pending) = self.pending_expiry.take() {
            pending.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::sleep;

    #[derive(Clone, Default)]
    struct RecordingClipboard {
        written: Arc<Mutex<Vec<String>>>,
        reject: bool,
    }

    impl ClipboardWriter for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.reject {
                return Err(ClipboardError::Rejected("permission denied".into()));
            }
            self.written.lock().push(text.to_string());
            Ok(())
        }
    }

    fn controller(clipboard: &RecordingClipboard) -> ClipboardFeedbackController {
        ClipboardFeedbackController::new(Box::new(clipboard.clone()), Handle::current())
    }

    #[tokio::test(start_paused = true)]
    async fn feedback_lasts_for_the_configured_duration() {
        let clipboard = RecordingClipboard::default();
        let mut feedback = controller(&clipboard);

        feedback.copy("print('hi')", "code").unwrap();
        assert!(feedback.is_active("code"));
        assert_eq!(clipboard.written.lock().as_slice(), ["print('hi')"]);

        sleep(Duration::from_millis(1_999)).await;
        assert!(feedback.is_active("code"));

        sleep(Duration::from_millis(2)).await;
        assert!(!feedback.is_active("code"));
        assert_eq!(feedback.state(), ClipboardState::default());
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_timer_does_not_clear_newer_feedback() {
        let clipboard = RecordingClipboard::default();
        let mut feedback = controller(&clipboard);

        feedback.copy("app", "code").unwrap();
        sleep(Duration::from_millis(1_500)).await;
        feedback.copy("reqs", "req").unwrap();

        // Past the deadline the first copy armed.
        sleep(Duration::from_millis(600)).await;
        assert!(feedback.is_active("req"));
        assert!(!feedback.is_active("code"));

        sleep(Duration::from_millis(1_500)).await;
        assert!(!feedback.is_active("req"));
    }

    #[tokio::test(start_paused = true)]
    async fn immediate_second_copy_replaces_first() {
        let clipboard = RecordingClipboard::default();
        let mut feedback = controller(&clipboard);

        feedback.copy("app", "code").unwrap();
        feedback.copy("reqs", "req").unwrap();
        assert!(feedback.is_active("req"));
        assert!(!feedback.is_active("code"));

        sleep(FEEDBACK.copy_feedback()).await;
        assert_eq!(feedback.state().active_id, None);
    }

    #[tokio::test(start_paused = true)]
    async fn rejected_write_leaves_state_untouched() {
        let clipboard = RecordingClipboard {
            reject: true,
            ..Default::default()
        };
        let mut feedback = controller(&clipboard);

        assert!(feedback.copy("app", "code").is_err());
        assert!(!feedback.is_active("code"));
        assert_eq!(feedback.remaining(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn rejected_write_keeps_earlier_feedback_and_its_deadline() {
        let accepting = RecordingClipboard::default();
        let mut feedback = controller(&accepting);
        feedback.copy("app", "code").unwrap();

        feedback.writer = Box::new(RecordingClipboard {
            reject: true,
            ..Default::default()
        });
        sleep(Duration::from_millis(500)).await;
        assert!(feedback.copy("reqs", "req").is_err());
        assert!(feedback.is_active("code"));
        let remaining = feedback.remaining().unwrap();
        assert!(remaining <= Duration::from_millis(1_500) && remaining >= Duration::from_millis(1_499));

        sleep(Duration::from_millis(1_501)).await;
        assert!(!feedback.is_active("code"));
    }

    #[tokio::test(start_paused = true)]
    async fn hook_runs_once_per_visible_expiry() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let clipboard = RecordingClipboard::default();
        let mut feedback = controller(&clipboard).with_expiry_hook(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        feedback.copy("a", "code").unwrap();
        sleep(Duration::from_millis(100)).await;
        feedback.copy("b", "req").unwrap();
        sleep(Duration::from_millis(5_000)).await;

        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn custom_duration_is_respected() {
        let clipboard = RecordingClipboard::default();
        let mut feedback = controller(&clipboard).with_duration(Duration::from_millis(250));

        feedback.copy("a", "code").unwrap();
        sleep(Duration::from_millis(251)).await;
        assert!(!feedback.is_active("code"));
    }

    #[tokio::test(start_paused = true)]
    async fn feedback_reads_idle_at_deadline_even_before_expiry_task_runs() {
        // Expiry tasks land on a runtime that is never driven, so only the deadline
        // check can make the feedback idle.
        let stalled = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let clipboard = RecordingClipboard::default();
        let mut feedback =
            ClipboardFeedbackController::new(Box::new(clipboard.clone()), stalled.handle().clone());

        feedback.copy("app", "code").unwrap();
        tokio::time::advance(Duration::from_millis(1_999)).await;
        assert!(feedback.is_active("code"));

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(!feedback.is_active("code"));
        assert_eq!(feedback.state(), ClipboardState::default());
        assert_eq!(feedback.remaining(), Some(Duration::ZERO));

        drop(feedback);
        stalled.shutdown_background();
    }

    struct UnavailableClipboard;

    impl ClipboardWriter for UnavailableClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(arboard::Error::ClipboardNotSupported.into())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn unavailable_system_clipboard_leaves_feedback_idle() {
        let mut feedback =
            ClipboardFeedbackController::new(Box::new(UnavailableClipboard), Handle::current());

        let err = feedback.copy("app", "code").unwrap_err();
        assert!(matches!(err, ClipboardError::System(arboard::Error::ClipboardNotSupported)));
        assert!(!feedback.is_active("code"));
        assert_eq!(feedback.state(), ClipboardState::default());
    }
}
