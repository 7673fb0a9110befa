//! QueryError: everything that can go wrong loading or querying plays.

/// Errors that can occur while loading the play store or serving a query.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryError {
    /// Input had the wrong shape (e.g. `plays` is not an array).
    InvalidArgument(String),
    /// Reading a data or config file failed.
    Io(String),
    /// A JSON document could not be parsed.
    Parse(String),
    /// No counterfactual is registered under this key.
    UnknownCounterfactual(String),
    /// No play at this store index.
    PlayNotFound(usize),
    /// Selected index is outside the session's current results.
    SelectionOutOfRange { index: usize, len: usize },
    /// The current results are empty, nothing to pick from.
    EmptyResults,
    /// Writing CSV output failed.
    Csv(String),
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            QueryError::Io(msg) => write!(f, "I/O error: {}", msg),
            QueryError::Parse(msg) => write!(f, "Parse error: {}", msg),
            QueryError::UnknownCounterfactual(key) => write!(f, "Unknown what-if scenario: {}", key),
            QueryError::PlayNotFound(index) => write!(f, "No play at index {}", index),
            QueryError::SelectionOutOfRange { index, len } => {
                write!(f, "Selection {} is out of range ({} plays match)", index, len)
            }
            QueryError::EmptyResults => write!(f, "No plays match the current filters"),
            QueryError::Csv(msg) => write!(f, "CSV error: {}", msg),
        }
    }
}

impl std::error::Error for QueryError {}

impl From<std::io::Error> for QueryError {
    fn from(e: std::io::Error) -> Self {
        QueryError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(e: serde_json::Error) -> Self {
        QueryError::Parse(e.to_string())
    }
}

impl From<csv::Error> for QueryError {
    fn from(e: csv::Error) -> Self {
        QueryError::Csv(e.to_string())
    }
}
