use std::{
    error::Error,
    fmt::{self, Display},
};

use rand::distr::uniform;

/// The result type used by the parameter initializers.
pub type Result<T> = std::result::Result<T, InitErr>;

/// Error returned whenever a parameter generator can't be built from its arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InitErr {
    /// The sampling range is empty or not finite.
    Range(uniform::Error),
}

impl Display for InitErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitErr::Range(e) => write!(f, "invalid sampling range: {e}"),
        }
    }
}

impl Error for InitErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InitErr::Range(e) => Some(e),
        }
    }
}

impl From<uniform::Error> for InitErr {
    fn from(value: uniform::Error) -> Self {
        Self::Range(value)
    }
}
