//! Chat orchestration: detect language -> fetch profile -> classify ->
//! compose (or fall back to the options menu) -> translate back.
//!
//! - Steps run strictly in sequence; nothing is fetched in parallel
//! - Detection failure is recovered as English; every other failure propagates
//! - No state survives between turns; the profile is re-fetched per question

use crate::domain::{ChatResponse, DomainError, build_menu, classify, compose};
use crate::ports::{ChatPort, ProfilePort, TranslationPort};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Language the core composes in.
pub const BASE_LANGUAGE: &str = "en";

/// Chat service. The answering core behind every front end.
pub struct ChatService {
    translator: Arc<dyn TranslationPort>,
    profiles: Arc<dyn ProfilePort>,
}

impl ChatService {
    pub fn new(translator: Arc<dyn TranslationPort>, profiles: Arc<dyn ProfilePort>) -> Self {
        Self {
            translator,
            profiles,
        }
    }

    /// Detect the asker's language by translating the question to English and
    /// reading back the reported code. Falls back to English on any failure.
    pub async fn detect_language(&self, question: &str) -> String {
        match self.translator.translate(question, BASE_LANGUAGE).await {
            Ok(result) => {
                let iso = result.iso.trim().to_lowercase();
                if iso.is_empty() {
                    warn!("translation service reported no language, assuming English");
                    BASE_LANGUAGE.to_string()
                } else {
                    iso
                }
            }
            Err(e) => {
                let e = DomainError::Detection(e.to_string());
                warn!(error = %e, "assuming English");
                BASE_LANGUAGE.to_string()
            }
        }
    }

    /// Translate composed English text into `lang`. No-op for English.
    async fn localize(&self, text: String, lang: &str) -> Result<String, DomainError> {
        if is_base_language(lang) {
            return Ok(text);
        }
        let translated = self.translator.translate(&text, lang).await?;
        debug!(lang, chars = translated.text.len(), "translated answer");
        Ok(translated.text)
    }
}

/// True for "en" and regional variants ("en-US", "EN_gb").
pub fn is_base_language(lang: &str) -> bool {
    lang.split(['-', '_'])
        .next()
        .is_some_and(|primary| primary.eq_ignore_ascii_case(BASE_LANGUAGE))
}

#[async_trait::async_trait]
impl ChatPort for ChatService {
    async fn answer(&self, question: &str) -> Result<ChatResponse, DomainError> {
        let lang = self.detect_language(question).await;
        let profile = self.profiles.fetch_profile().await?;

        let intent = classify(question);
        info!(
            intent = intent.label(),
            key = intent.key().unwrap_or(""),
            lang = %lang,
            "classified question"
        );

        if let Some(mut response) = compose(&intent, &profile) {
            response.text = self.localize(response.text, &lang).await?;
            return Ok(response);
        }

        info!(intent = intent.label(), "no answer composed, showing options menu");
        let menu = self.localize(build_menu(&profile), &lang).await?;
        Ok(ChatResponse::markdown(menu))
    }
}
