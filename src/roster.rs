use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{FolioError, FolioResult},
    profile::{Contact, Profile, Project, Skills},
};

/// The immutable profile list backing the whole session.
///
/// Constructed once at startup, either from the built-in team data or
/// from a roster TOML file, and never mutated afterwards. Lookup by id
/// and ordered iteration are the only read paths the views need.
///
/// Deserialization funnels through `new` via `try_from`, so the
/// unique-id and non-empty invariants hold for every `Roster` however
/// it was built.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawRoster")]
pub struct Roster {
    profiles: Vec<Profile>,
}

#[derive(Deserialize)]
struct RawRoster {
    profiles: Vec<Profile>,
}

impl TryFrom<RawRoster> for Roster {
    type Error = FolioError;

    fn try_from(raw: RawRoster) -> Result<Self, Self::Error> {
        Self::new(raw.profiles)
    }
}

impl Roster {
    /// Builds a roster, rejecting empty lists and duplicate ids.
    pub fn new(profiles: Vec<Profile>) -> FolioResult<Self> {
        if profiles.is_empty() {
            return Err(FolioError::EmptyRoster);
        }
        for (i, profile) in profiles.iter().enumerate() {
            if profiles[..i].iter().any(|p| p.id == profile.id) {
                return Err(FolioError::DuplicateProfile(profile.id.clone()));
            }
        }
        Ok(Self { profiles })
    }

    /// Parses a roster from TOML `[[profiles]]` tables.
    pub fn from_toml_str(content: &str) -> FolioResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads a roster file from disk.
    pub fn load(path: &Path) -> FolioResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| FolioError::RosterRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn get(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.profiles.iter().position(|p| p.id == id)
    }

    /// Profiles in stored order; the directory renders tiles in this
    /// exact order.
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// The built-in team data used when no roster file is configured.
    pub fn builtin() -> Self {
        let profiles = vec![
            Profile {
                id: "mira".to_string(),
                name: "Mira Castellan".to_string(),
                profession: "Full-stack Developer".to_string(),
                avatar: "◕‿◕".to_string(),
                bio: "Hi, I'm Mira, a full-stack developer who enjoys taking products \
                      from a sketch on a napkin to something people rely on every day.\n\
                      Most of my recent work has been building dashboards and internal \
                      tooling, with a soft spot for making slow pages fast."
                    .to_string(),
                skills: Skills {
                    frontend: Some(vec![
                        "React".to_string(),
                        "TypeScript".to_string(),
                        "HTML5".to_string(),
                        "CSS".to_string(),
                    ]),
                    backend: Some(vec![
                        "Node.js".to_string(),
                        "PostgreSQL".to_string(),
                        "Redis".to_string(),
                    ]),
                    tools: Some(vec!["Git".to_string(), "Docker".to_string()]),
                },
                projects: vec![
                    Project {
                        title: "Ledgerline".to_string(),
                        description: "A shared expense tracker for small teams with \
                                      realtime balances and CSV export."
                            .to_string(),
                        technologies: vec![
                            "React".to_string(),
                            "Node.js".to_string(),
                            "PostgreSQL".to_string(),
                        ],
                        live_link: Some("https://ledgerline.example.com".to_string()),
                        source_link: Some("https://github.com/mirac/ledgerline".to_string()),
                    },
                    Project {
                        title: "Pace".to_string(),
                        description: "Page performance budgets enforced in CI, with a \
                                      weekly digest of regressions."
                            .to_string(),
                        technologies: vec!["TypeScript".to_string(), "GitHub Actions".to_string()],
                        live_link: None,
                        source_link: Some("https://github.com/mirac/pace".to_string()),
                    },
                ],
                contact: Contact {
                    email: "mira@folio.example.com".to_string(),
                    linkedin: Some("https://www.linkedin.com/in/miracastellan".to_string()),
                    github: Some("https://github.com/mirac".to_string()),
                    twitter: None,
                },
            },
            Profile {
                id: "devan".to_string(),
                name: "Devan Okafor".to_string(),
                profession: "Backend Developer, Data Engineer".to_string(),
                avatar: "⌐■_■".to_string(),
                bio: "I build data pipelines and the services that feed on them.\n\
                      Currently deep in stream processing; previously shipped billing \
                      systems that nobody noticed, which is the highest compliment \
                      billing systems get."
                    .to_string(),
                skills: Skills {
                    frontend: None,
                    backend: Some(vec![
                        "Python".to_string(),
                        "Django".to_string(),
                        "Kafka".to_string(),
                        "MongoDB".to_string(),
                    ]),
                    tools: Some(vec![
                        "Git".to_string(),
                        "Terraform".to_string(),
                        "Grafana".to_string(),
                    ]),
                },
                projects: vec![Project {
                    title: "Quill Moderation Bot".to_string(),
                    description: "A chat moderation bot with configurable rules, audit \
                                  logs and per-channel overrides."
                        .to_string(),
                    technologies: vec!["Python".to_string(), "Discord API".to_string()],
                    live_link: None,
                    source_link: Some("https://github.com/devanok/quill-bot".to_string()),
                }],
                contact: Contact {
                    email: "devan@folio.example.com".to_string(),
                    linkedin: Some("https://www.linkedin.com/in/devanokafor".to_string()),
                    github: Some("https://github.com/devanok".to_string()),
                    twitter: Some("https://twitter.com/devanok".to_string()),
                },
            },
            Profile {
                id: "sofia".to_string(),
                name: "Sofia Lindqvist".to_string(),
                profession: "Frontend Developer".to_string(),
                avatar: "✿◠‿◠".to_string(),
                bio: "Third-year CS student and frontend developer, eager to learn, \
                      explore and grow. I care a lot about interfaces that feel obvious \
                      in hindsight."
                    .to_string(),
                skills: Skills {
                    frontend: Some(vec![
                        "HTML5".to_string(),
                        "CSS".to_string(),
                        "JavaScript".to_string(),
                        "React".to_string(),
                    ]),
                    backend: None,
                    tools: None,
                },
                projects: vec![Project {
                    title: "Skylight".to_string(),
                    description: "A weather dashboard with hour-by-hour forecasts and \
                                  a frankly unnecessary amount of animation."
                        .to_string(),
                    technologies: vec![
                        "HTML".to_string(),
                        "CSS".to_string(),
                        "JavaScript".to_string(),
                    ],
                    live_link: Some("https://skylight.example.com".to_string()),
                    source_link: None,
                }],
                contact: Contact {
                    email: "sofia@folio.example.com".to_string(),
                    linkedin: Some("https://www.linkedin.com/in/sofialindqvist".to_string()),
                    github: None,
                    twitter: None,
                },
            },
        ];

        // The built-in data is authored by hand; the unique-id check in
        // `new` still applies to it, and the unwrap is covered by tests.
        Self::new(profiles).expect("built-in roster is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_roster_is_valid_and_ordered() {
        let roster = Roster::builtin();
        assert_eq!(roster.len(), 3);
        let ids: Vec<&str> = roster.profiles().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["mira", "devan", "sofia"]);
    }

    #[test]
    fn lookup_by_id() {
        let roster = Roster::builtin();
        assert_eq!(roster.get("devan").unwrap().name, "Devan Okafor");
        assert!(roster.get("nobody").is_none());
        assert_eq!(roster.position("sofia"), Some(2));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut profiles = Roster::builtin().profiles().to_vec();
        let mut dup = profiles[0].clone();
        dup.name = "Someone Else".to_string();
        profiles.push(dup);

        let err = Roster::new(profiles).unwrap_err();
        assert!(matches!(err, FolioError::DuplicateProfile(id) if id == "mira"));
    }

    #[test]
    fn empty_roster_is_rejected() {
        assert!(matches!(Roster::new(Vec::new()), Err(FolioError::EmptyRoster)));
    }

    /// The invariants hold even for callers that deserialize a `Roster`
    /// directly instead of going through `from_toml_str`.
    #[test]
    fn deserialization_enforces_roster_invariants() {
        let duplicated = r#"
            [[profiles]]
            id = "ada"
            name = "Ada One"
            profession = "Engineer"
            bio = "First."
            projects = []

            [profiles.skills]
            [profiles.contact]
            email = "one@example.com"

            [[profiles]]
            id = "ada"
            name = "Ada Two"
            profession = "Engineer"
            bio = "Second."
            projects = []

            [profiles.skills]
            [profiles.contact]
            email = "two@example.com"
        "#;

        let err = toml::from_str::<Roster>(duplicated).unwrap_err();
        assert!(err.to_string().contains("duplicate profile id"));

        assert!(toml::from_str::<Roster>("profiles = []").is_err());
    }

    #[test]
    fn roster_loads_from_toml() {
        let content = r#"
            [[profiles]]
            id = "ada"
            name = "Ada Example"
            profession = "Engineer"
            bio = "One paragraph."

            [profiles.skills]
            backend = ["Rust"]

            [[profiles.projects]]
            title = "Thing"
            description = "Does things."
            technologies = ["Rust"]
            live_link = "https://thing.example.com"

            [profiles.contact]
            email = "ada@example.com"
        "#;

        let roster = Roster::from_toml_str(content).unwrap();
        let ada = roster.get("ada").unwrap();
        assert_eq!(ada.avatar, "");
        assert!(ada.skills.frontend.is_none());
        assert_eq!(ada.projects[0].live_link.as_deref(), Some("https://thing.example.com"));
        assert!(ada.projects[0].source_link.is_none());
        assert!(ada.contact.links().is_empty());
    }

    #[test]
    fn roster_file_round_trip() {
        let roster = Roster::builtin();
        let content = toml::to_string_pretty(&roster).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.toml");
        std::fs::write(&path, content).unwrap();

        let loaded = Roster::load(&path).unwrap();
        assert_eq!(loaded.profiles(), roster.profiles());
    }

    #[test]
    fn missing_roster_file_errors_with_path() {
        let err = Roster::load(Path::new("/nonexistent/roster.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/roster.toml"));
    }
}
