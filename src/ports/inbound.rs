//! Inbound ports. Front ends call into the application.

use crate::domain::{ChatResponse, DomainError};

/// The single entry point of the answering core.
#[async_trait::async_trait]
pub trait ChatPort: Send + Sync {
    /// Answer one free-text question in the asker's language.
    async fn answer(&self, question: &str) -> Result<ChatResponse, DomainError>;
}

/// Interactive front end (terminal, ...). Drives `ChatPort` until the user quits.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    async fn run(&self) -> Result<(), DomainError>;
}
