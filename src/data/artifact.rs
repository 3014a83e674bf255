use strum_macros::{Display, EnumIter};

use crate::config::{ARTIFACTS, ArtifactResource};

/// The two distributable artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ArtifactId {
    #[strum(to_string = "app.py")]
    AppScript,
    #[strum(to_string = "requirements.txt")]
    Requirements,
}

impl ArtifactId {
    pub fn resource(self) -> &'static ArtifactResource {
        match self {
            ArtifactId::AppScript => &ARTIFACTS.app_script,
            ArtifactId::Requirements => &ARTIFACTS.requirements,
        }
    }

    pub fn path(self) -> &'static str {
        self.resource().path
    }

    pub fn filename(self) -> &'static str {
        self.resource().filename
    }

    pub fn copy_id(self) -> &'static str {
        self.resource().copy_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactStatus {
    Unloaded,
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub id: ArtifactId,
    pub content: String,
    pub status: ArtifactStatus,
}

impl Artifact {
    pub fn unloaded(id: ArtifactId) -> Self {
        Self {
            id,
            content: String::new(),
            status: ArtifactStatus::Unloaded,
        }
    }

    pub fn loaded(id: ArtifactId, content: String) -> Self {
        Self {
            id,
            content,
            status: ArtifactStatus::Loaded,
        }
    }

    /// A failed artifact still carries usable (placeholder) content.
    pub fn failed(id: ArtifactId) -> Self {
        Self {
            id,
            content: ARTIFACTS.placeholder.to_string(),
            status: ArtifactStatus::Failed,
        }
    }

    pub fn name(&self) -> &'static str {
        self.id.filename()
    }
    /// Content is final (retrieved text or placeholder) and safe to copy or download.
    /// False while a first load or a retry is still running.
    pub fn is_ready(&self) -> bool {
        matches!(self.status, ArtifactStatus::Loaded | ArtifactStatus::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_artifacts_are_ready() {
        assert!(Artifact::loaded(ArtifactId::AppScript, "print(1)".into()).is_ready());
        assert!(Artifact::failed(ArtifactId::Requirements).is_ready());
    }

    #[test]
    fn unloaded_and_retrying_artifacts_are_not_ready() {
        assert!(!Artifact::unloaded(ArtifactId::AppScript).is_ready());

        // A retry keeps the old placeholder around while the new fetch runs.
        let mut retrying = Artifact::failed(ArtifactId::AppScript);
        retrying.status = ArtifactStatus::Loading;
        assert!(!retrying.is_ready());
    }
}
