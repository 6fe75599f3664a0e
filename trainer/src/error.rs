use std::{
    error::Error,
    fmt::{self, Display},
};

/// The trainer module's result type.
pub type Result<T> = std::result::Result<T, ConfigErr>;

/// Error returned when a training configuration can't be used.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigErr {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErr::InvalidValue { field, reason } => {
                write!(f, "invalid value for `{field}`: {reason}")
            }
        }
    }
}

impl Error for ConfigErr {}
