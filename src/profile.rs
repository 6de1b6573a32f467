use serde::{Deserialize, Serialize};

/// A portfolio owner's full data record.
///
/// Profiles are hand-authored and immutable for the lifetime of the
/// session: the roster is built once at startup and only ever read.
/// The `id` is a stable string used by the selection machine; it must
/// be unique across the roster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Stable identifier, unique within the roster.
    pub id: String,
    /// Display name shown on the tile and the detail overlay.
    pub name: String,
    /// Profession label, e.g. "Backend Developer".
    pub profession: String,
    /// Short glyph shown in place of a photo on the summary tile.
    #[serde(default)]
    pub avatar: String,
    /// Multi-paragraph biography; paragraphs are newline-delimited.
    pub bio: String,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub contact: Contact,
}

impl Profile {
    /// Biography paragraphs in stored order, skipping blank lines.
    pub fn bio_paragraphs(&self) -> impl Iterator<Item = &str> {
        self.bio
            .split('\n')
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

/// Skill groups, one optional category per fixed kind.
///
/// An absent category means the profile simply has nothing in it and
/// the detail view omits the whole block; categories are never stored
/// as empty lists.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    pub frontend: Option<Vec<String>>,
    pub backend: Option<Vec<String>>,
    pub tools: Option<Vec<String>>,
}

impl Skills {
    pub fn is_empty(&self) -> bool {
        self.frontend.is_none() && self.backend.is_none() && self.tools.is_none()
    }

    /// Present groups with their display titles, in the fixed
    /// frontend → backend → tools order the detail view renders.
    pub fn groups(&self) -> Vec<(&'static str, &[String])> {
        let mut groups = Vec::new();
        if let Some(skills) = &self.frontend {
            groups.push(("Front-end Development", skills.as_slice()));
        }
        if let Some(skills) = &self.backend {
            groups.push(("Back-end Development", skills.as_slice()));
        }
        if let Some(skills) = &self.tools {
            groups.push(("Tools & Technologies", skills.as_slice()));
        }
        groups
    }
}

/// A single portfolio project card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Technology tags in stored order.
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Link to a running deployment, when one exists.
    #[serde(default)]
    pub live_link: Option<String>,
    /// Link to the source repository, when public.
    #[serde(default)]
    pub source_link: Option<String>,
}

/// Contact block: email is required, the external links are optional
/// and omitted from the overlay when absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
}

impl Contact {
    /// Present external links with display labels, in fixed order.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        let mut links = Vec::new();
        if let Some(url) = &self.linkedin {
            links.push(("LinkedIn", url.as_str()));
        }
        if let Some(url) = &self.github {
            links.push(("GitHub", url.as_str()));
        }
        if let Some(url) = &self.twitter {
            links.push(("Twitter", url.as_str()));
        }
        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> Profile {
        Profile {
            id: "sample".to_string(),
            name: "Sample Person".to_string(),
            profession: "Developer".to_string(),
            avatar: "ツ".to_string(),
            bio: "First paragraph.\nSecond paragraph.\n\n".to_string(),
            skills: Skills {
                frontend: Some(vec!["HTML".to_string()]),
                backend: None,
                tools: Some(vec!["Git".to_string()]),
            },
            projects: vec![],
            contact: Contact {
                email: "sample@example.com".to_string(),
                linkedin: None,
                github: Some("https://github.com/sample".to_string()),
                twitter: None,
            },
        }
    }

    #[test]
    fn bio_paragraphs_skip_blank_lines() {
        let profile = sample_profile();
        let paragraphs: Vec<&str> = profile.bio_paragraphs().collect();
        assert_eq!(paragraphs, vec!["First paragraph.", "Second paragraph."]);
    }

    #[test]
    fn absent_skill_groups_are_omitted() {
        let profile = sample_profile();
        let groups = profile.skills.groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Front-end Development");
        assert_eq!(groups[1].0, "Tools & Technologies");
    }

    #[test]
    fn contact_links_keep_fixed_order() {
        let contact = Contact {
            email: "a@b.c".to_string(),
            linkedin: Some("https://linkedin.com/in/a".to_string()),
            github: Some("https://github.com/a".to_string()),
            twitter: Some("https://twitter.com/a".to_string()),
        };
        let labels: Vec<&str> = contact.links().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["LinkedIn", "GitHub", "Twitter"]);
    }
}
