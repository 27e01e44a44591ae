//! Translation adapters. Implement TranslationPort.
//!
//! Google's public endpoint, a JSON translate route, and an offline passthrough.

pub mod google_adapter;
pub mod http_adapter;
pub mod passthrough;

pub use google_adapter::{DEFAULT_GOOGLE_TRANSLATE_URL, GoogleTranslateAdapter};
pub use http_adapter::HttpTranslateAdapter;
pub use passthrough::PassthroughTranslator;
