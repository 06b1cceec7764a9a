//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ModelError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 2 belongs to clap (usage errors) and is never produced here.

use historian_client::ModelError;

/// Structured exit codes for historian-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - I/O failure, bad option value, or anything unclassified.
    GeneralError = 1,

    /// Validation error - the payload is malformed or violates its schema.
    ///
    /// Scripts should fix the input and not retry.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ModelError> for ExitCode {
    fn from(err: &ModelError) -> Self {
        match err {
            ModelError::Malformed { .. } | ModelError::Schema { .. } => ExitCode::ValidationError,
            ModelError::Encode(_) | ModelError::UnknownSchema(_) => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no ModelError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ModelError>())
            .map_or(ExitCode::GeneralError, ExitCode::from)
    }
}
