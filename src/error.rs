//! Error types for the storesmith CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for storesmith operations.
///
/// Each variant maps to a specific exit code. Failures that have a documented
/// fallback (missing metadata directories, unreadable source files, failed
/// tag ranges) never surface here; they are recovered at the call site.
#[derive(Error, Debug)]
pub enum StoresmithError {
    /// User provided invalid arguments, a required credential is missing,
    /// or a local file operation failed.
    #[error("{0}")]
    UserError(String),

    /// The text-generation service returned a failure or an unusable response.
    #[error("Text generation failed: {0}")]
    ApiError(String),

    /// Git operation failed with no fallback.
    #[error("Git operation failed: {0}")]
    GitError(String),
}

impl StoresmithError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            StoresmithError::UserError(_) => exit_codes::USER_ERROR,
            StoresmithError::ApiError(_) => exit_codes::API_FAILURE,
            StoresmithError::GitError(_) => exit_codes::GIT_FAILURE,
        }
    }
}

/// Result type alias for storesmith operations.
pub type Result<T> = std::result::Result<T, StoresmithError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = StoresmithError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn api_error_has_correct_exit_code() {
        let err = StoresmithError::ApiError("500 from upstream".to_string());
        assert_eq!(err.exit_code(), exit_codes::API_FAILURE);
    }

    #[test]
    fn git_error_has_correct_exit_code() {
        let err = StoresmithError::GitError("log failed".to_string());
        assert_eq!(err.exit_code(), exit_codes::GIT_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = StoresmithError::UserError(
            "ANTHROPIC_API_KEY environment variable not set".to_string(),
        );
        assert_eq!(
            err.to_string(),
            "ANTHROPIC_API_KEY environment variable not set"
        );

        let err = StoresmithError::ApiError("status 429".to_string());
        assert_eq!(err.to_string(), "Text generation failed: status 429");
    }
}
