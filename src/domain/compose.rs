//! Response composition: intent + profile -> canonical English answer.
//!
//! `None` means the intent needs data the profile does not have; callers fall
//! back to the options menu. Output depends only on the inputs.

use crate::domain::{ChatResponse, Contact, Intent, ProfileDocument, Project};

const CONTACT_ALL_INTRO: &str =
    "Hi there! If you're looking to get in touch with me, here are some options:";
const CONTACT_ALL_OUTRO: &str = "Which method do you prefer?";
const PROJECTS_INTRO: &str = "Here are my featured projects:";
const ABOUT_HEADING: &str = "**About Me:**";
const NO_BIO: &str = "No bio available.";
const AVATAR_CAPTION: &str = "Here's my profile picture:";
const IMAGE_CAPTION: &str = "Here's the image you requested:";

/// Compose the answer for a classified intent.
pub fn compose(intent: &Intent, profile: &ProfileDocument) -> Option<ChatResponse> {
    match intent {
        Intent::ContactAll => Some(contact_all(&profile.contacts)),
        Intent::Contact { key } => contact(&profile.contacts, key),
        Intent::Projects => Some(projects(&profile.projects)),
        Intent::Project { key } => project(&profile.projects, key),
        Intent::About => Some(about(profile)),
        Intent::Image { key } => image(profile, key),
        Intent::Unclassified => None,
    }
}

/// Visible part of a contact URL: `mailto:` is dropped, the link keeps it.
fn display_url(url: &str) -> &str {
    url.strip_prefix("mailto:").unwrap_or(url)
}

fn contact_all(contacts: &[Contact]) -> ChatResponse {
    let lines = contacts
        .iter()
        .map(|c| format!("- **{}:** [{}]({})", c.label, display_url(&c.url), c.url))
        .collect::<Vec<_>>()
        .join("\n");
    ChatResponse::markdown(format!(
        "{CONTACT_ALL_INTRO}\n\n{lines}\n\n{CONTACT_ALL_OUTRO}"
    ))
}

fn contact(contacts: &[Contact], key: &str) -> Option<ChatResponse> {
    let found = contacts.iter().find(|c| c.label.eq_ignore_ascii_case(key))?;
    let text = if found.label.eq_ignore_ascii_case("email") {
        format!("[{}]({})", display_url(&found.url), found.url)
    } else {
        format!("[{}]({})", found.label, found.url)
    };
    Some(ChatResponse::markdown(text))
}

fn project_line(p: &Project) -> String {
    format!("**[{}]({})**: {}", p.name, p.url, p.description)
}

fn projects(projects: &[Project]) -> ChatResponse {
    let bullets = projects
        .iter()
        .map(|p| format!("- {}", project_line(p)))
        .collect::<Vec<_>>()
        .join("\n");
    ChatResponse::markdown(format!("{PROJECTS_INTRO}\n{bullets}"))
}

/// First project whose name contains `key`, ignoring case. Not a best match.
fn project(projects: &[Project], key: &str) -> Option<ChatResponse> {
    let needle = key.to_lowercase();
    let found = projects
        .iter()
        .find(|p| p.name.to_lowercase().contains(&needle))?;
    Some(ChatResponse::markdown(project_line(found)).with_image(found.image_url.clone()))
}

fn about(profile: &ProfileDocument) -> ChatResponse {
    let joined = profile.bio.join(" ");
    let bio = if joined.trim().is_empty() {
        NO_BIO
    } else {
        joined.as_str()
    };
    ChatResponse::markdown(format!("{ABOUT_HEADING}\n\n{bio}"))
        .with_image(profile.avatar_url.clone())
}

fn image(profile: &ProfileDocument, key: &str) -> Option<ChatResponse> {
    if key == "profile" {
        if let Some(avatar) = &profile.avatar_url {
            return Some(ChatResponse::markdown(AVATAR_CAPTION).with_image(Some(avatar.clone())));
        }
    }
    profile
        .images
        .get(key)
        .map(|url| ChatResponse::markdown(IMAGE_CAPTION).with_image(Some(url.clone())))
}
