//! JSON translation endpoint adapter.
//!
//! POSTs `{"text", "to"}` and expects `{"text", "iso"}` back; an `{"error"}`
//! body or non-2xx status is a translation failure.

use crate::domain::{DomainError, TranslateResult};
use crate::ports::TranslationPort;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Adapter for a self-hosted translate route.
pub struct HttpTranslateAdapter {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    text: &'a str,
    to: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    text: Option<String>,
    iso: Option<String>,
    error: Option<String>,
}

impl HttpTranslateAdapter {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("HTTP client: {}", e)))?;
        Ok(Self { client, endpoint })
    }

    fn into_result(
        body: TranslateResponse,
        target_lang: &str,
    ) -> Result<TranslateResult, DomainError> {
        if let Some(error) = body.error {
            return Err(DomainError::Translation(error));
        }
        let text = body
            .text
            .ok_or_else(|| DomainError::Translation("response has no text".to_string()))?;
        let iso = body
            .iso
            .filter(|code| !code.trim().is_empty())
            .unwrap_or_else(|| target_lang.to_string());
        Ok(TranslateResult { text, iso })
    }
}

#[async_trait::async_trait]
impl TranslationPort for HttpTranslateAdapter {
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
    ) -> Result<TranslateResult, DomainError> {
        if text.trim().is_empty() {
            return Ok(TranslateResult {
                text: text.to_string(),
                iso: target_lang.to_string(),
            });
        }

        let response = self
            .client
            .post(&self.endpoint)
            .json(&TranslateRequest {
                text,
                to: target_lang,
            })
            .send()
            .await
            .map_err(|e| DomainError::Translation(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "translate endpoint returned error");
            return Err(DomainError::Translation(format!(
                "API error {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Translation(format!("Failed to parse response: {}", e)))?;

        let result = Self::into_result(body, target_lang)?;
        debug!(target_lang, iso = %result.iso, "translation complete");
        Ok(result)
    }
}
