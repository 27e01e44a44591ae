//! Implements ProfilePort with an HTTP GET of a JSON profile document.

use crate::adapters::profile::mapper::profile_from_json;
use crate::domain::{DomainError, ProfileDocument};
use crate::ports::ProfilePort;
use std::time::Duration;
use tracing::warn;

pub struct RemoteProfileAdapter {
    client: reqwest::Client,
    url: String,
}

impl RemoteProfileAdapter {
    pub fn new(url: String, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("HTTP client: {}", e)))?;
        Ok(Self { client, url })
    }
}

#[async_trait::async_trait]
impl ProfilePort for RemoteProfileAdapter {
    async fn fetch_profile(&self) -> Result<ProfileDocument, DomainError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DomainError::ProfileFetch(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            warn!(status = %status, url = %self.url, "profile endpoint returned error");
            return Err(DomainError::ProfileFetch(format!(
                "profile endpoint returned {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::ProfileFetch(format!("read body: {}", e)))?;
        profile_from_json(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_endpoint_is_fetch_failure() {
        let adapter = RemoteProfileAdapter::new(
            "http://127.0.0.1:9/profile".to_string(),
            Duration::from_secs(1),
        )
        .unwrap();
        assert!(matches!(
            adapter.fetch_profile().await,
            Err(DomainError::ProfileFetch(_))
        ));
    }
}
