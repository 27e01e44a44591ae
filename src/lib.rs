//! intouch-bot: answers questions about a single profile, in the asker's language.
//!
//! Hexagonal layout: `domain` holds the answering rules, `usecases` the chat
//! pipeline, `adapters` the translation/profile/terminal integrations.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
