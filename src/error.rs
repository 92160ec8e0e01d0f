//! Error types for bankmock

use std::fmt;
use std::path::PathBuf;

/// Result type alias for bankmock operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for bankmock
#[derive(Debug)]
pub enum Error {
    /// Request metadata carried no scenario key, or an empty value
    MissingScenario,
    /// Scenario value is outside the declared set
    UnknownScenario(String),
    /// No fixture exists for the resolved (operation, scenario) path
    MockFileNotFound(PathBuf),
    /// Fixture content does not conform to the operation's contract
    ContractValidation {
        contract: &'static str,
        path: PathBuf,
        message: String,
    },
    /// IO errors
    Io(std::io::Error),
    /// Configuration errors
    Config(String),
    /// Internal error
    Internal(String),
}

impl Error {
    /// Whether the caller is at fault (bad scenario metadata) rather than
    /// the fixture set.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::MissingScenario | Error::UnknownScenario(_))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingScenario => {
                write!(f, "{} is required", crate::scenario::SCENARIO_KEY)
            }
            Error::UnknownScenario(raw) => write!(f, "Unknown test scenario: {}", raw),
            Error::MockFileNotFound(path) => {
                write!(f, "Mock file not found: {}", path.display())
            }
            Error::ContractValidation {
                contract,
                path,
                message,
            } => write!(
                f,
                "Mock file {} does not match contract {}: {}",
                path.display(),
                contract,
                message
            ),
            Error::Io(e) => write!(f, "IO error: {}", e),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<Error> for tonic::Status {
    fn from(e: Error) -> Self {
        if e.is_client_error() {
            tonic::Status::invalid_argument(e.to_string())
        } else {
            tonic::Status::internal(e.to_string())
        }
    }
}
