//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, ProfileDocument, TranslateResult};

/// Translation service boundary.
#[async_trait::async_trait]
pub trait TranslationPort: Send + Sync {
    /// Translate `text` into `target_lang` (ISO 639-1, e.g. "es").
    ///
    /// `iso` in the result is the language code the service reports; for
    /// services that auto-detect it is the detected source language.
    async fn translate(&self, text: &str, target_lang: &str)
        -> Result<TranslateResult, DomainError>;
}

/// Profile provider boundary. Each call returns current truth; no caching
/// contract is assumed.
#[async_trait::async_trait]
pub trait ProfilePort: Send + Sync {
    async fn fetch_profile(&self) -> Result<ProfileDocument, DomainError>;
}
