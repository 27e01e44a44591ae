//! Application configuration. Translation provider, profile sources, timeouts.

use crate::domain::DomainError;
use serde::Deserialize;

/// Default transport timeout for translation and remote profile calls.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

/// Which translation backend answers detection and outbound translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslateProvider {
    /// Google's public translate endpoint.
    #[default]
    Google,
    /// A JSON route taking `{text, to}` and returning `{text, iso}`.
    Http,
    /// No translation; every asker is treated as English-speaking.
    None,
}

impl std::str::FromStr for TranslateProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "http" => Ok(Self::Http),
            "none" | "off" => Ok(Self::None),
            other => Err(format!("unknown translate provider: {other}")),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Translation backend: `google`, `http` or `none`. Read from INTOUCH_TRANSLATE_PROVIDER.
    #[serde(default)]
    pub translate_provider: Option<String>,

    /// Translation endpoint URL. Required for `http`; overrides the Google default.
    /// Read from INTOUCH_TRANSLATE_URL.
    #[serde(default)]
    pub translate_url: Option<String>,

    /// Transport timeout in seconds for outbound HTTP. Read from INTOUCH_HTTP_TIMEOUT_SECS.
    #[serde(default)]
    pub http_timeout_secs: Option<u64>,

    // ─────────────────────────────────────────────────────────────────────────
    // Profile sources
    // ─────────────────────────────────────────────────────────────────────────
    /// JSON profile file. Read from INTOUCH_PROFILE_PATH. Unset = bundled profile.
    #[serde(default)]
    pub profile_path: Option<String>,

    /// Remote JSON profile, consulted when the primary source fails.
    /// Read from INTOUCH_PROFILE_URL.
    #[serde(default)]
    pub profile_url: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("INTOUCH"));
        if let Ok(path) = std::env::var("INTOUCH_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the translation provider. Defaults to Google; unknown names are an error.
    pub fn translate_provider_or_default(&self) -> Result<TranslateProvider, DomainError> {
        match self.translate_provider.as_deref() {
            None => Ok(TranslateProvider::default()),
            Some(name) if name.trim().is_empty() => Ok(TranslateProvider::default()),
            Some(name) => name.parse().map_err(DomainError::Config),
        }
    }

    /// Returns the HTTP timeout in seconds. Defaults to 15.
    pub fn http_timeout_secs_or_default(&self) -> u64 {
        self.http_timeout_secs.unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS)
    }

    /// Returns the translation endpoint if configured (non-empty).
    pub fn translate_url(&self) -> Option<String> {
        self.translate_url.clone().filter(|u| !u.trim().is_empty())
    }

    /// Returns the profile file path if configured (non-empty).
    pub fn profile_path(&self) -> Option<String> {
        self.profile_path.clone().filter(|p| !p.trim().is_empty())
    }

    /// Returns the remote profile URL if configured (non-empty).
    pub fn profile_url(&self) -> Option<String> {
        self.profile_url.clone().filter(|u| !u.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(
            cfg.translate_provider_or_default().unwrap(),
            TranslateProvider::Google
        );
        assert_eq!(cfg.http_timeout_secs_or_default(), 15);
        assert_eq!(cfg.profile_path(), None);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let cfg = AppConfig {
            translate_url: Some("  ".into()),
            profile_url: Some(String::new()),
            ..AppConfig::default()
        };
        assert_eq!(cfg.translate_url(), None);
        assert_eq!(cfg.profile_url(), None);
    }

    #[test]
    fn unknown_provider_is_config_error() {
        let cfg = AppConfig {
            translate_provider: Some("deepl".into()),
            ..AppConfig::default()
        };
        assert!(matches!(
            cfg.translate_provider_or_default(),
            Err(DomainError::Config(_))
        ));
    }

    #[test]
    fn provider_parsing() {
        assert_eq!("Google".parse::<TranslateProvider>(), Ok(TranslateProvider::Google));
        assert_eq!("http".parse::<TranslateProvider>(), Ok(TranslateProvider::Http));
        assert_eq!("off".parse::<TranslateProvider>(), Ok(TranslateProvider::None));
        assert!("deepl".parse::<TranslateProvider>().is_err());
    }
}
