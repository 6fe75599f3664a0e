use std::{
    error::Error,
    fmt::{self, Display},
    io,
    path::PathBuf,
};

/// The result type used when loading the application's configuration.
pub type Result<T> = std::result::Result<T, LoadErr>;

/// Failures while loading the application's configuration.
#[derive(Debug)]
pub enum LoadErr {
    Io { path: PathBuf, source: io::Error },
    Json(serde_json::Error),
    Invalid(trainer::ConfigErr),
}

impl Display for LoadErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadErr::Io { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
            LoadErr::Json(e) => write!(f, "invalid JSON: {e}"),
            LoadErr::Invalid(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl Error for LoadErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadErr::Io { source, .. } => Some(source),
            LoadErr::Json(e) => Some(e),
            LoadErr::Invalid(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for LoadErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<trainer::ConfigErr> for LoadErr {
    fn from(value: trainer::ConfigErr) -> Self {
        Self::Invalid(value)
    }
}
