// Artifact retrieval, signal feed loading and downloads
pub mod artifact;
pub mod artifact_source;
pub mod artifact_store;
pub mod download;
pub mod requirements;
pub mod signal_feed;

// Re-export commonly used types
pub use artifact::{Artifact, ArtifactId, ArtifactStatus};
pub use artifact_source::{ArtifactError, ArtifactSource, DirArtifactSource, HttpArtifactSource};
pub use artifact_store::{ArtifactLoad, ArtifactStore};
pub use download::{DownloadError, DownloadSink};
pub use signal_feed::{demo_snapshot, load_snapshot, snapshot_or_demo};
