//! Fallback options menu, shown when nothing else answers the question.

use crate::domain::ProfileDocument;
use std::collections::HashSet;

/// Topics that are always offered, ahead of profile-derived ones.
pub const FIXED_OPTIONS: [&str; 4] = ["Projects", "About", "Contact", "Avatar"];

const PREAMBLE: &str =
    "Sorry, I couldn't understand your request. Here are some options you can try:";
const CLOSING: &str = "Please type one of the options above.";

/// Fixed topics, then contact labels, then project names: deduplicated
/// (exact match, first occurrence kept) and without blanks.
pub fn menu_options(profile: &ProfileDocument) -> Vec<&str> {
    let mut seen = HashSet::new();
    FIXED_OPTIONS
        .into_iter()
        .chain(profile.contacts.iter().map(|c| c.label.as_str()))
        .chain(profile.projects.iter().map(|p| p.name.as_str()))
        .filter(|opt| !opt.trim().is_empty())
        .filter(|opt| seen.insert(*opt))
        .collect()
}

/// Render the menu as markdown. Never empty.
pub fn build_menu(profile: &ProfileDocument) -> String {
    let bullets = menu_options(profile)
        .iter()
        .map(|opt| format!("- {opt}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{PREAMBLE}\n\n{bullets}\n\n{CLOSING}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::sample_profile;
    use crate::domain::{Contact, Project};

    #[test]
    fn empty_profile_offers_only_fixed_labels() {
        let menu = build_menu(&ProfileDocument::default());
        let bullets: Vec<&str> = menu.lines().filter(|l| l.starts_with("- ")).collect();
        assert_eq!(bullets, ["- Projects", "- About", "- Contact", "- Avatar"]);
        assert!(menu.starts_with("Sorry, I couldn't understand your request."));
        assert!(menu.ends_with("Please type one of the options above."));
    }

    #[test]
    fn profile_labels_follow_fixed_ones_in_order() {
        assert_eq!(
            menu_options(&sample_profile()),
            [
                "Projects",
                "About",
                "Contact",
                "Avatar",
                "GitHub",
                "LinkedIn",
                "Email",
                "InTouchBot",
                "Portfolio Website"
            ]
        );
    }

    #[test]
    fn duplicates_and_blanks_are_dropped() {
        let profile = ProfileDocument {
            contacts: vec![
                Contact {
                    label: "Contact".into(),
                    url: "https://a".into(),
                },
                Contact {
                    label: "".into(),
                    url: "https://b".into(),
                },
            ],
            projects: vec![
                Project {
                    name: "Bot".into(),
                    description: String::new(),
                    url: String::new(),
                    image_url: None,
                },
                Project {
                    name: "Bot".into(),
                    description: String::new(),
                    url: String::new(),
                    image_url: None,
                },
            ],
            ..ProfileDocument::default()
        };
        assert_eq!(
            menu_options(&profile),
            ["Projects", "About", "Contact", "Avatar", "Bot"]
        );
        assert!(!build_menu(&profile).contains("- \n"));
    }
}
