use std::{
    error::Error,
    fmt::{self, Display},
};

/// The analysis module's result type.
pub type Result<T> = std::result::Result<T, AnalysisErr>;

/// Failures of an analysis request.
#[derive(Debug)]
pub enum AnalysisErr {
    /// The environment variable holding the service key is not set.
    MissingCredentials { var: String },
    /// The service answered with no text.
    EmptyResponse,
    /// The service answered with a document not following the schema.
    Json(serde_json::Error),
    /// The service could not be reached.
    Unavailable(String),
}

impl Display for AnalysisErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisErr::MissingCredentials { var } => {
                write!(f, "credentials not found, `{var}` is not set")
            }
            AnalysisErr::EmptyResponse => write!(f, "the analysis service sent no response"),
            AnalysisErr::Json(e) => write!(f, "invalid analysis response: {e}"),
            AnalysisErr::Unavailable(detail) => write!(f, "analysis service unavailable: {detail}"),
        }
    }
}

impl Error for AnalysisErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AnalysisErr::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AnalysisErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
