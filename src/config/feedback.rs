//! Copy-feedback timing.

use std::time::Duration;

pub struct FeedbackConfig {
    /// How long a "Copied!" confirmation stays visible
    pub copy_feedback_ms: u64,
}

impl FeedbackConfig {
    pub const fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }
}

pub const FEEDBACK: FeedbackConfig = FeedbackConfig {
    copy_feedback_ms: 2_000,
};
