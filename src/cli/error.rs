//! CLI-level errors (wraps domain and discovery errors)

use thiserror::Error;

use crate::config::ConfigError;
use crate::discovery::DiscoveryError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Discovery(#[from] DiscoveryError),

    #[error("{0}")]
    Config(#[from] ConfigError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => crate::exitcode::CONFIG,
            CliError::Domain(e) => match e {
                DomainError::CycleDetected { .. } => crate::exitcode::DATAERR,
                DomainError::InternalError(_) => crate::exitcode::SOFTWARE,
            },
            CliError::Discovery(e) => match e {
                DiscoveryError::DirectoryNotFound(_) | DiscoveryError::NotADirectory(_) => {
                    crate::exitcode::NOINPUT
                }
                DiscoveryError::Io { .. } | DiscoveryError::Walk(_) => crate::exitcode::IOERR,
                DiscoveryError::Parse { .. } | DiscoveryError::DuplicateEntity { .. } => {
                    crate::exitcode::DATAERR
                }
            },
        }
    }
}
