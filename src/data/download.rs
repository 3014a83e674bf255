use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("refusing to save to {0:?}: not a plain file name")]
    InvalidFilename(String),
    #[error("could not write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Saves artifact content byte-for-byte under a download directory.
///
/// Content is staged in a temporary file next to the destination and moved into place
/// only once fully written; a failed save leaves no partial file behind.
#[derive(Debug, Clone)]
pub struct DownloadSink {
    dir: PathBuf,
}

impl DownloadSink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn save(&self, content: &str, filename: &str) -> Result<PathBuf, DownloadError> {
        let is_plain_name = Path::new(filename)
            .file_name()
            .is_some_and(|name| name == filename);
        if !is_plain_name {
            return Err(DownloadError::InvalidFilename(filename.to_string()));
        }

        let io_err = |source| DownloadError::Io {
            path: self.dir.clone(),
            source,
        };

        std::fs::create_dir_all(&self.dir).map_err(io_err)?;
        let mut staged = NamedTempFile::new_in(&self.dir).map_err(io_err)?;
        staged.write_all(content.as_bytes()).map_err(io_err)?;
        staged.flush().map_err(io_err)?;

        let destination = self.dir.join(filename);
        staged
            .persist(&destination)
            .map_err(|e| DownloadError::Io {
                path: destination.clone(),
                source: e.error,
            })?;

        log::info!("💾 Saved {} ({} bytes)", destination.display(), content.len());
        Ok(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ARTIFACTS;

    #[test]
    fn writes_content_byte_exact() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DownloadSink::new(dir.path());
        let content = "import numpy as np\r\nprint('¥157.32')\n";

        let path = sink.save(content, "app.py").unwrap();

        assert_eq!(path, dir.path().join("app.py"));
        assert_eq!(std::fs::read(&path).unwrap(), content.as_bytes());
    }

    #[test]
    fn placeholder_content_still_produces_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DownloadSink::new(dir.path());

        let path = sink.save(ARTIFACTS.placeholder, "app.py").unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert!(!written.is_empty());
        assert_eq!(written, ARTIFACTS.placeholder);
    }

    #[test]
    fn overwrites_previous_download_and_leaves_no_staging_files() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DownloadSink::new(dir.path());

        sink.save("old", "requirements.txt").unwrap();
        sink.save("new", "requirements.txt").unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("requirements.txt")).unwrap(),
            "new"
        );
    }

    #[test]
    fn creates_missing_download_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DownloadSink::new(dir.path().join("nested/downloads"));

        let path = sink.save("x", "app.py").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn rejects_paths_as_filenames() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DownloadSink::new(dir.path());

        for name in ["../app.py", "sub/app.py", ""] {
            assert!(
                matches!(sink.save("x", name), Err(DownloadError::InvalidFilename(_))),
                "{name:?}"
            );
        }
    }
}
