//! Shared config and wiring helpers.

pub mod config;
