//! Implements ProfilePort by reading a JSON file.
//!
//! The file is re-read on every fetch so edits show up on the next question.

use crate::adapters::profile::mapper::profile_from_json;
use crate::domain::{DomainError, ProfileDocument};
use crate::ports::ProfilePort;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

pub struct JsonFileProfileAdapter {
    path: PathBuf,
}

impl JsonFileProfileAdapter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl ProfilePort for JsonFileProfileAdapter {
    async fn fetch_profile(&self) -> Result<ProfileDocument, DomainError> {
        let json = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::ProfileFetch(format!("read {}: {}", self.path.display(), e))
        })?;
        debug!(path = %self.path.display(), bytes = json.len(), "loaded profile file");
        profile_from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_profile_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(
            &path,
            r#"{"contact": [{"label": "GitHub", "url": "https://github.com/x"}]}"#,
        )
        .unwrap();

        let profile = JsonFileProfileAdapter::new(&path).fetch_profile().await.unwrap();
        assert_eq!(profile.contacts.len(), 1);
        assert!(profile.projects.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_fetch_failure() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = JsonFileProfileAdapter::new(dir.path().join("absent.json"));
        assert!(matches!(
            adapter.fetch_profile().await,
            Err(DomainError::ProfileFetch(_))
        ));
    }

    #[tokio::test]
    async fn test_edits_are_picked_up() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        let adapter = JsonFileProfileAdapter::new(&path);

        std::fs::write(&path, r#"{"profile": {"bio": ["One."]}}"#).unwrap();
        assert_eq!(adapter.fetch_profile().await.unwrap().bio, ["One."]);

        std::fs::write(&path, r#"{"profile": {"bio": ["Two."]}}"#).unwrap();
        assert_eq!(adapter.fetch_profile().await.unwrap().bio, ["Two."]);
    }
}
