//! Distributable artifact locations and retrieval settings.

/// A text file served from the static origin.
pub struct ArtifactResource {
    /// Path relative to the origin (or to the artifact directory)
    pub path: &'static str,
    /// Name offered when the artifact is downloaded
    pub filename: &'static str,
    /// Identifier used by copy feedback
    pub copy_id: &'static str,
}

pub struct ArtifactsConfig {
    pub app_script: ArtifactResource,
    pub requirements: ArtifactResource,
    /// Content substituted when a retrieval fails
    pub placeholder: &'static str,
    /// Origin used when none is given on the command line
    pub default_origin: &'static str,
    pub request_timeout_ms: u64,
}

pub const ARTIFACTS: ArtifactsConfig = ArtifactsConfig {
    app_script: ArtifactResource {
        path: "/app.py",
        filename: "app.py",
        copy_id: "code",
    },
    requirements: ArtifactResource {
        path: "/requirements.txt",
        filename: "requirements.txt",
        copy_id: "req",
    },
    placeholder: "# Error loading file",
    default_origin: "http://127.0.0.1:8000",
    request_timeout_ms: 10_000,
};
