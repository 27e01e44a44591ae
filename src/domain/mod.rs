//! Core domain layer. No external I/O dependencies.
//!
//! Entities and the answering rules (classification, composition, fallback
//! menu) live here. Dependencies flow inward.

pub mod compose;
pub mod entities;
pub mod errors;
pub mod intent;
pub mod menu;

#[cfg(test)]
pub(crate) mod fixtures;

pub use compose::compose;
pub use entities::{ChatResponse, Contact, Intent, ProfileDocument, Project, TranslateResult};
pub use errors::DomainError;
pub use intent::classify;
pub use menu::build_menu;
