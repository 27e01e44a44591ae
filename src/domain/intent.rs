//! Rule-ordered intent classification.
//!
//! Questions are lower-cased and run through [`RULES`] top to bottom; the
//! first rule that returns an intent wins. The broad word-boundary fallbacks
//! ("project", "about") deliberately capture most questions that mention
//! them, biasing toward a structured answer over the fallback menu.

use crate::domain::Intent;
use regex::Regex;
use std::sync::LazyLock;

/// A single classification rule. Returns `Some` when it claims the question.
pub type Rule = fn(&str) -> Option<Intent>;

/// Ordered classification table. Order is the precedence contract.
pub const RULES: &[(&str, Rule)] = &[
    ("contact_all", contact_all),
    ("contact", named_network),
    ("projects", project_listing),
    ("about", about),
    ("project", single_project),
    ("image", image),
];

const CONTACT_ALL_PHRASES: &[&str] = &["contact", "how contact", "get in touch", "reach you"];

/// Checked in this order; the first network mentioned in the list wins,
/// not the first one mentioned in the question.
const NETWORKS: &[(&str, &str)] = &[
    ("github", "GitHub"),
    ("linkedin", "LinkedIn"),
    ("email", "Email"),
    ("instagram", "Instagram"),
];

const PROJECT_LIST_PHRASES: &[&str] = &["list all projects", "show all projects", "what projects"];

const ABOUT_PHRASES: &[&str] = &["about you", "about me", "bio", "sobre você", "quem é você"];

const IMAGE_PHRASES: &[&str] = &[
    "profile picture",
    "avatar",
    "your photo",
    "your image",
    "foto",
    "imagem",
];

/// Words that can sit between "about" and "project" without naming one.
const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "your", "my", "his", "her", "their", "our", "any", "each",
    "every", "some", "all",
];

static PROJECTS_QUESTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"projects\s*\?").expect("valid projects-question regex"));

static PROJECT_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bprojects?\b").expect("valid project-word regex"));

static ABOUT_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\babout\b").expect("valid about-word regex"));

static SINGLE_PROJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:tell me about|information about|about|info)\s+(\w+)\s+project\b")
        .expect("valid single-project regex")
});

/// Lower-case and collapse whitespace.
pub fn normalize_question(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Classify a raw question. Never fails; no match yields `Unclassified`.
pub fn classify(question: &str) -> Intent {
    let normalized = normalize_question(question);
    RULES
        .iter()
        .find_map(|(_, rule)| rule(&normalized))
        .unwrap_or(Intent::Unclassified)
}

fn contact_all(q: &str) -> Option<Intent> {
    contains_any(q, CONTACT_ALL_PHRASES).then_some(Intent::ContactAll)
}

fn named_network(q: &str) -> Option<Intent> {
    NETWORKS
        .iter()
        .find(|(needle, _)| q.contains(needle))
        .map(|(_, key)| Intent::Contact {
            key: (*key).to_string(),
        })
}

fn project_listing(q: &str) -> Option<Intent> {
    if contains_any(q, PROJECT_LIST_PHRASES) || PROJECTS_QUESTION.is_match(q) {
        return Some(Intent::Projects);
    }
    // The bare fallback yields to a phrase that names one project.
    (PROJECT_WORD.is_match(q) && single_project_key(q).is_none()).then_some(Intent::Projects)
}

fn about(q: &str) -> Option<Intent> {
    if contains_any(q, ABOUT_PHRASES) {
        return Some(Intent::About);
    }
    (ABOUT_WORD.is_match(q) && single_project_key(q).is_none()).then_some(Intent::About)
}

fn single_project(q: &str) -> Option<Intent> {
    single_project_key(q).map(|key| Intent::Project { key })
}

fn image(q: &str) -> Option<Intent> {
    contains_any(q, IMAGE_PHRASES).then(|| Intent::Image {
        key: "profile".to_string(),
    })
}

/// Extract `<word>` from "(about|info|information about|tell me about) <word> project".
fn single_project_key(q: &str) -> Option<String> {
    SINGLE_PROJECT
        .captures_iter(q)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .find(|word| !DETERMINERS.contains(word))
        .map(str::to_string)
}

fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}
