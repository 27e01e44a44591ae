//! Shared test profile.

use crate::domain::{Contact, ProfileDocument, Project};
use std::collections::BTreeMap;

pub(crate) fn sample_profile() -> ProfileDocument {
    ProfileDocument {
        name: Some("Matheus".into()),
        age: Some(25),
        bio: vec!["Full-stack developer.".into(), "Open to work.".into()],
        avatar_url: Some("https://example.com/me.png".into()),
        projects: vec![
            Project {
                name: "InTouchBot".into(),
                description: "A chatbot about me.".into(),
                url: "https://github.com/theushen/InTouchBot".into(),
                image_url: Some("https://example.com/bot.png".into()),
            },
            Project {
                name: "Portfolio Website".into(),
                description: "My portfolio.".into(),
                url: "https://theushen.me".into(),
                image_url: None,
            },
        ],
        contacts: vec![
            Contact {
                label: "GitHub".into(),
                url: "https://github.com/theushen".into(),
            },
            Contact {
                label: "LinkedIn".into(),
                url: "https://linkedin.com/in/theushen".into(),
            },
            Contact {
                label: "Email".into(),
                url: "mailto:x@y.com".into(),
            },
        ],
        images: BTreeMap::from([(
            "banner".to_string(),
            "https://example.com/b.png".to_string(),
        )]),
    }
}
