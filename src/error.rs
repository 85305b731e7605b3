/// Error taxonomy for the game core.
///
/// Gameplay itself never fails: slicing twice, ticking with no fingertips
/// and similar conditions are defined no-ops.  Errors only come from
/// configuration (rejected before a session starts) and from the pose
/// source (which callers downgrade to "no fingertips this tick").

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// A configuration value is out of its accepted range.
    InvalidConfiguration { field: &'static str, reason: String },
    /// A configuration document is not valid JSON for `GameConfig`.
    ConfigParse(serde_json::Error),
    /// A configuration file could not be read.
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The pose source produced nothing for this tick.
    InputUnavailable,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfiguration { field, reason } => {
                write!(f, "invalid configuration: `{}` {}", field, reason)
            }
            Error::ConfigParse(err) => write!(f, "could not parse configuration: {}", err),
            Error::ConfigIo { path, source } => {
                write!(f, "could not read {}: {}", path.display(), source)
            }
            Error::InputUnavailable => f.write_str("no fingertip input available for this tick"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ConfigParse(err) => Some(err),
            Error::ConfigIo { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigParse(err)
    }
}
