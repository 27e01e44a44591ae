//! Map the profile JSON document to domain entities.
//!
//! Wire shape: `{profile:{name,age,bio,avatar}, featuredProjects, contact, images}`.
//! Every section is optional and defaults to empty.

use crate::domain::{Contact, DomainError, ProfileDocument, Project};
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileWire {
    #[serde(default)]
    profile: PersonWire,
    #[serde(default)]
    featured_projects: Vec<ProjectWire>,
    #[serde(default)]
    contact: Vec<ContactWire>,
    #[serde(default)]
    images: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
struct PersonWire {
    name: Option<String>,
    age: Option<u32>,
    #[serde(default)]
    bio: Vec<String>,
    avatar: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProjectWire {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    url: String,
    image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContactWire {
    label: String,
    url: String,
}

impl From<ProfileWire> for ProfileDocument {
    fn from(wire: ProfileWire) -> Self {
        ProfileDocument {
            name: wire.profile.name,
            age: wire.profile.age,
            bio: wire.profile.bio,
            avatar_url: wire.profile.avatar.filter(|a| !a.is_empty()),
            projects: wire
                .featured_projects
                .into_iter()
                .map(|p| Project {
                    name: p.name,
                    description: p.description,
                    url: p.url,
                    image_url: p.image.filter(|i| !i.is_empty()),
                })
                .collect(),
            contacts: wire
                .contact
                .into_iter()
                .map(|c| Contact {
                    label: c.label,
                    url: c.url,
                })
                .collect(),
            images: wire.images,
        }
    }
}

/// Parse a profile JSON document. Malformed input is a profile fetch failure.
pub fn profile_from_json(json: &str) -> Result<ProfileDocument, DomainError> {
    serde_json::from_str::<ProfileWire>(json)
        .map(ProfileDocument::from)
        .map_err(|e| DomainError::ProfileFetch(format!("malformed profile JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_document() {
        let doc = profile_from_json(
            r#"{
                "profile": {"name": "Ana", "age": 30, "bio": ["Hi."], "avatar": "a.png"},
                "featuredProjects": [{"name": "Bot", "description": "d", "url": "u", "image": "b.png"}],
                "contact": [{"label": "Email", "url": "mailto:a@b.c"}],
                "images": {"profile": "a.png"}
            }"#,
        )
        .unwrap();
        assert_eq!(doc.name.as_deref(), Some("Ana"));
        assert_eq!(doc.age, Some(30));
        assert_eq!(doc.bio, ["Hi."]);
        assert_eq!(doc.avatar_url.as_deref(), Some("a.png"));
        assert_eq!(doc.projects[0].image_url.as_deref(), Some("b.png"));
        assert_eq!(doc.contacts[0].label, "Email");
        assert_eq!(doc.images.get("profile").map(String::as_str), Some("a.png"));
    }

    #[test]
    fn test_empty_object_is_empty_profile() {
        assert_eq!(profile_from_json("{}").unwrap(), ProfileDocument::default());
    }

    #[test]
    fn test_empty_avatar_is_absent() {
        let doc = profile_from_json(r#"{"profile": {"avatar": ""}}"#).unwrap();
        assert_eq!(doc.avatar_url, None);
    }

    #[test]
    fn test_malformed_json_is_fetch_failure() {
        assert!(matches!(
            profile_from_json("{not json"),
            Err(DomainError::ProfileFetch(_))
        ));
        assert!(matches!(
            profile_from_json(r#"{"contact": [{"label": "GitHub"}]}"#),
            Err(DomainError::ProfileFetch(_))
        ));
    }
}
