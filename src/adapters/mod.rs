//! Infrastructure adapters. Implement outbound ports and drive inbound ones.
//!
//! Translation services, profile sources, terminal UI. Map errors to DomainError.

pub mod profile;
pub mod translate;
pub mod ui;
