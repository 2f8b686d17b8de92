// ============================================================================
// mpf-component-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types for the component runner
//
// Detection failures from a component are kept intact so the runner can
// report their error kind; argument, I/O and JSON problems get their own
// variants.

use mpf_component_core::ComponentDetectionFailure;
use thiserror::Error;

/// Errors surfaced by the CLI.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Detection failed: {0}")]
    Detection(#[from] ComponentDetectionFailure),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error. Detection failures are reported
    /// separately from usage problems.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Detection(_) => 2,
            _ => 1,
        }
    }
}

/// Type alias for CLI results.
pub type CliResult<T> = std::result::Result<T, CliError>;
