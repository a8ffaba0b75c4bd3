//! Exit code constants for the storesmith CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing credential, local IO)
//! - 2: Text-generation API failure
//! - 3: Git operation failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, missing credential, or local file failure.
pub const USER_ERROR: i32 = 1;

/// API failure: the text-generation service request could not be completed.
pub const API_FAILURE: i32 = 2;

/// Git operation failure with no documented fallback.
pub const GIT_FAILURE: i32 = 3;
