use std::error::Error;
use std::fmt;

/// Why a single source contributed nothing to this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Transport failure or a non-success HTTP status.
    Unavailable(String),
    /// The document arrived but could not be parsed.
    Malformed(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Unavailable(msg) => write!(f, "Source unavailable: {msg}"),
            SourceError::Malformed(msg) => write!(f, "Source malformed: {msg}"),
        }
    }
}

impl Error for SourceError {}
