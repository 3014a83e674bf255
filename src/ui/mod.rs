// User interface components
pub mod app;
mod app_async;
pub mod clipboard_feedback;
pub mod config;
pub mod styles;
pub mod ui_panels;
mod ui_render;
pub mod ui_text;
pub mod utils;
pub mod view_state;

// Re-export main app
pub use app::DashboardApp;
pub use clipboard_feedback::{ClipboardError, ClipboardFeedbackController, ClipboardState, ClipboardWriter, SystemClipboard};
pub use config::UI_CONFIG;
pub use view_state::{Section, ViewAction, ViewState};
