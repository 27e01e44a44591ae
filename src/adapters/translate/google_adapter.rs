//! Google Translate adapter (public `translate_a/single` endpoint).
//!
//! Source language is always `auto`; the detected source code comes back as
//! the third element of the response array and is reported as `iso`.

use crate::domain::{DomainError, TranslateResult};
use crate::ports::TranslationPort;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Default public endpoint (no API key).
pub const DEFAULT_GOOGLE_TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// Google Translate adapter.
pub struct GoogleTranslateAdapter {
    client: reqwest::Client,
    api_url: String,
}

impl GoogleTranslateAdapter {
    /// Create a new adapter.
    ///
    /// # Arguments
    /// * `api_url` - Endpoint (e.g. [`DEFAULT_GOOGLE_TRANSLATE_URL`])
    /// * `timeout` - Per-request transport timeout
    pub fn new(api_url: String, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("HTTP client: {}", e)))?;
        Ok(Self { client, api_url })
    }

    /// Parse the nested-array response:
    /// `[[["hola","hello",...], ...], null, "en", ...]`.
    fn parse_response(body: &Value, target_lang: &str) -> Result<TranslateResult, DomainError> {
        let segments = body
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| DomainError::Translation("unexpected response shape".to_string()))?;

        let text: String = segments
            .iter()
            .filter_map(|seg| seg.get(0).and_then(Value::as_str))
            .collect();

        let iso = body
            .get(2)
            .and_then(Value::as_str)
            .filter(|code| !code.is_empty())
            .unwrap_or(target_lang)
            .to_string();

        Ok(TranslateResult { text, iso })
    }
}

#[async_trait::async_trait]
impl TranslationPort for GoogleTranslateAdapter {
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
            .get(&self.api_url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| DomainError::Translation(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "translate API returned error");
            return Err(DomainError::Translation(format!(
                "API error {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| DomainError::Translation(format!("Failed to parse API response: {}", e)))?;

        let result = Self::parse_response(&body, target_lang)?;
        debug!(
            target_lang,
            detected = %result.iso,
            chars = result.text.len(),
            "translation complete"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_joins_segments_and_reads_detected_language() {
        let body = json!([
            [["¡Hola! ", "Hi there! ", null, null, 10], ["¿Qué método prefieres?", "Which method do you prefer?", null, null, 10]],
            null,
            "en",
            null
        ]);
        let result = GoogleTranslateAdapter::parse_response(&body, "es").unwrap();
        assert_eq!(result.text, "¡Hola! ¿Qué método prefieres?");
        assert_eq!(result.iso, "en");
    }

    #[test]
    fn test_parse_without_detected_language_uses_target() {
        let body = json!([[["hello", "hola", null, null, 1]], null]);
        let result = GoogleTranslateAdapter::parse_response(&body, "en").unwrap();
        assert_eq!(result.text, "hello");
        assert_eq!(result.iso, "en");
    }

    #[test]
    fn test_parse_rejects_unexpected_shape() {
        let body = json!({"error": "nope"});
        assert!(matches!(
            GoogleTranslateAdapter::parse_response(&body, "es"),
            Err(DomainError::Translation(_))
        ));
    }

    #[tokio::test]
    async fn test_blank_text_is_not_sent() {
        let adapter =
            GoogleTranslateAdapter::new("http://127.0.0.1:9".to_string(), Duration::from_secs(1))
                .unwrap();
        let result = adapter.translate("  ", "es").await.unwrap();
        assert_eq!(result.text, "  ");
        assert_eq!(result.iso, "es");
    }
}
