//! Primary profile source with a fallback. Implements ProfilePort.
//!
//! The fallback is only consulted when the primary fails; when both fail the
//! error is explicit, never an empty profile.

use crate::domain::{DomainError, ProfileDocument};
use crate::ports::ProfilePort;
use std::sync::Arc;
use tracing::warn;

pub struct ChainedProfileAdapter {
    primary: Arc<dyn ProfilePort>,
    fallback: Arc<dyn ProfilePort>,
}

impl ChainedProfileAdapter {
    pub fn new(primary: Arc<dyn ProfilePort>, fallback: Arc<dyn ProfilePort>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait::async_trait]
impl ProfilePort for ChainedProfileAdapter {
    async fn fetch_profile(&self) -> Result<ProfileDocument, DomainError> {
        match self.primary.fetch_profile().await {
            Ok(profile) => Ok(profile),
            Err(primary_err) => {
                warn!(error = %primary_err, "primary profile source failed, trying fallback");
                self.fallback.fetch_profile().await.map_err(|fallback_err| {
                    DomainError::ProfileFetch(format!(
                        "all profile sources failed ({}; {})",
                        primary_err, fallback_err
                    ))
                })
            }
        }
    }
}
