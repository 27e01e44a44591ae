//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/wire types here — these are mapped from adapters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The single profile every answer is derived from. Read-only to the core.
///
/// Any section may be empty; consumers degrade instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDocument {
    pub name: Option<String>,
    pub age: Option<u32>,
    /// Bio sentences, in display order.
    pub bio: Vec<String>,
    pub avatar_url: Option<String>,
    pub projects: Vec<Project>,
    pub contacts: Vec<Contact>,
    /// Image identifier -> image reference.
    pub images: BTreeMap<String, String>,
}

/// A featured project. `name` is the lookup key (case-insensitive substring).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub url: String,
    pub image_url: Option<String>,
}

/// A contact method. `label` is free-form ("GitHub", "Email", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub label: String,
    pub url: String,
}

/// Classified purpose of a question. Lives for a single request only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    ContactAll,
    Contact { key: String },
    Projects,
    Project { key: String },
    About,
    Image { key: String },
    Unclassified,
}

impl Intent {
    /// Stable tag used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::ContactAll => "contact_all",
            Intent::Contact { .. } => "contact",
            Intent::Projects => "projects",
            Intent::Project { .. } => "project",
            Intent::About => "about",
            Intent::Image { .. } => "image",
            Intent::Unclassified => "unclassified",
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            Intent::Contact { key } | Intent::Project { key } | Intent::Image { key } => {
                Some(key.as_str())
            }
            _ => None,
        }
    }
}

/// One answer handed back to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_markdown: bool,
}

impl ChatResponse {
    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image_url: None,
            is_markdown: true,
        }
    }

    pub fn with_image(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }
}

/// Result of a translation call. `iso` is the language code the service
/// reports (the detected source language when it detects one).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateResult {
    pub text: String,
    pub iso: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_keys_only_on_keyed_variants() {
        assert_eq!(Intent::Contact { key: "GitHub".into() }.key(), Some("GitHub"));
        assert_eq!(Intent::Image { key: "profile".into() }.label(), "image");
        assert_eq!(Intent::About.key(), None);
        assert_eq!(Intent::Unclassified.label(), "unclassified");
    }

    #[test]
    fn chat_response_serializes_camel_case_and_skips_missing_image() {
        let json = serde_json::to_value(ChatResponse::markdown("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"text": "hi", "isMarkdown": true}));

        let with_image = ChatResponse::markdown("hi").with_image(Some("a.png".into()));
        let json = serde_json::to_value(with_image).unwrap();
        assert_eq!(json["imageUrl"], "a.png");
    }
}
