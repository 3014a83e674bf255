use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::config::ARTIFACTS;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("request for {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Somewhere the artifact texts can be read from.
#[async_trait]
pub trait ArtifactSource: Send + Sync {
    /// Reads the text stored at `path` (e.g. "/app.py").
    async fn fetch(&self, path: &str) -> Result<String, ArtifactError>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

/// Plain GET against a static origin; no auth, no pagination.
pub struct HttpArtifactSource {
    client: reqwest::Client,
    origin: String,
}

impl HttpArtifactSource {
    pub fn new(origin: impl Into<String>) -> Result<Self, ArtifactError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(ARTIFACTS.request_timeout_ms))
            .build()
            .map_err(ArtifactError::Client)?;

        Ok(Self {
            client,
            origin: origin.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.origin, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl ArtifactSource for HttpArtifactSource {
    async fn fetch(&self, path: &str) -> Result<String, ArtifactError> {
        let url = self.url_for(path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ArtifactError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ArtifactError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| ArtifactError::Request { url, source })
    }

    fn signature(&self) -> &'static str {
        "HTTP origin"
    }
}

/// Reads the same relative paths from a local directory.
pub struct DirArtifactSource {
    root: PathBuf,
}

impl DirArtifactSource {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ArtifactSource for DirArtifactSource {
    async fn fetch(&self, path: &str) -> Result<String, ArtifactError> {
        let full_path = self.root.join(path.trim_start_matches('/'));
        tokio::fs::read_to_string(&full_path)
            .await
            .map_err(|source| ArtifactError::Io {
                path: full_path,
                source,
            })
    }

    fn signature(&self) -> &'static str {
        "Local directory"
    }
}
