//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep the noisy ones `false` so debug builds
//! stay readable. Release builds never consult these.

pub struct DebugFlags {
    /// Emit UI interaction logs (section switches, legend toggles, button presses).
    pub print_ui_interactions: bool,

    /// Emit per-artifact retrieval start/finish with timings.
    pub print_artifact_loads: bool,

    /// Emit copy-feedback arming and expiry.
    pub print_clipboard_events: bool,

    /// Emit the alignment verdict for every asset once the feed is loaded.
    pub print_alignment: bool,

    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_artifact_loads: true,
    print_clipboard_events: false,
    print_alignment: true,
    print_shutdown: false,
};
