//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Language detection failed or returned no usable code. Recovered by the
    /// chat service (defaults to English).
    #[error("Language detection failed: {0}")]
    Detection(String),

    /// Profile provider unreachable or returned malformed data. Fails the turn.
    #[error("Profile fetch failed: {0}")]
    ProfileFetch(String),

    /// Outbound translation of a composed answer failed. Fails the turn.
    #[error("Translation failed: {0}")]
    Translation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),
}
