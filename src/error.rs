use std::path::PathBuf;

use thiserror::Error;

pub type FolioResult<T> = Result<T, FolioError>;

/// Domain errors for roster handling and profile selection.
///
/// Opening a profile with an id that is not in the roster is a caller
/// contract violation rather than a user-facing condition; it is
/// surfaced as an error instead of rendering a blank overlay so that
/// integration bugs show up early.
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("no profile with id '{0}' in the roster")]
    UnknownProfile(String),

    #[error("duplicate profile id '{0}' in the roster")]
    DuplicateProfile(String),

    #[error("the roster contains no profiles")]
    EmptyRoster,

    #[error("failed to read roster file {}: {source}", path.display())]
    RosterRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse roster file: {0}")]
    RosterParse(#[from] toml::de::Error),
}
