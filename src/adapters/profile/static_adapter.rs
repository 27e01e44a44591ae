//! Implements ProfilePort over an injected, immutable snapshot.

use crate::adapters::profile::mapper::profile_from_json;
use crate::domain::{DomainError, ProfileDocument};
use crate::ports::ProfilePort;
use std::sync::Arc;

/// Profile bundled with the binary.
const EMBEDDED_PROFILE: &str = include_str!("../../../data/profile.json");

/// In-memory profile. Every fetch returns the same snapshot.
pub struct StaticProfileAdapter {
    profile: Arc<ProfileDocument>,
}

impl StaticProfileAdapter {
    pub fn new(profile: ProfileDocument) -> Self {
        Self {
            profile: Arc::new(profile),
        }
    }

    /// Load the profile bundled at `data/profile.json`.
    pub fn embedded() -> Result<Self, DomainError> {
        profile_from_json(EMBEDDED_PROFILE).map(Self::new)
    }
}

#[async_trait::async_trait]
impl ProfilePort for StaticProfileAdapter {
    async fn fetch_profile(&self) -> Result<ProfileDocument, DomainError> {
        Ok(ProfileDocument::clone(&self.profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_embedded_profile_parses() {
        let adapter = StaticProfileAdapter::embedded().unwrap();
        let profile = adapter.fetch_profile().await.unwrap();
        assert!(!profile.bio.is_empty());
        assert!(profile.projects.iter().any(|p| p.name == "InTouchBot"));
        assert!(profile.contacts.iter().any(|c| c.label == "Email"));
    }

    #[tokio::test]
    async fn test_snapshot_is_stable() {
        let adapter = StaticProfileAdapter::new(ProfileDocument::default());
        assert_eq!(
            adapter.fetch_profile().await.unwrap(),
            adapter.fetch_profile().await.unwrap()
        );
    }
}
