//! CLI-level errors (wraps domain and infrastructure errors)

use thiserror::Error;

use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("check failed: {0} issue(s) found")]
    CheckFailed(usize),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Domain(_) => crate::exitcode::DATAERR,
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => crate::exitcode::IOERR,
                InfraError::Parse { .. } => crate::exitcode::DATAERR,
                InfraError::Selection { .. } => crate::exitcode::SOFTWARE,
            },
            CliError::Config(_) => crate::exitcode::CONFIG,
            CliError::CheckFailed(_) => crate::exitcode::DATAERR,
            CliError::Usage(_) => crate::exitcode::USAGE,
        }
    }
}
