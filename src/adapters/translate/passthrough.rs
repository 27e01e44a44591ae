//! Offline translator. Returns text unchanged and always reports English.
//!
//! Used when no translation service is configured: every asker is treated as
//! English-speaking, so answers are never sent anywhere.

use crate::domain::{DomainError, TranslateResult};
use crate::ports::TranslationPort;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughTranslator;

impl PassthroughTranslator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl TranslationPort for PassthroughTranslator {
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
    ) -> Result<TranslateResult, DomainError> {
        debug!(target_lang, "[PASSTHROUGH] translation disabled");
        Ok(TranslateResult {
            text: text.to_string(),
            iso: "en".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_passthrough_keeps_text_and_reports_english() {
        let result = PassthroughTranslator::new()
            .translate("¿cómo puedo contactarte?", "en")
            .await
            .unwrap();
        assert_eq!(result.text, "¿cómo puedo contactarte?");
        assert_eq!(result.iso, "en");
    }
}
