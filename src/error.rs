//! Error handling for Palaver operations.
//!
//! This module defines the error types used throughout the engine. All
//! public APIs return `Result<T, SocialError>` for consistent error
//! handling.
//!
//! Every variant is a recoverable condition reported back to the session
//! layer for display; none is fatal to the process. Operations are
//! deterministic in-memory lookups, so retrying a failed call without
//! changing its inputs is never meaningful.

use thiserror::Error;

use crate::model::PostId;

/// Result type for Palaver operations.
///
/// All public APIs return `Result<T, SocialError>` for error handling.
pub type Result<T> = std::result::Result<T, SocialError>;

/// Errors that can occur during social network operations.
#[derive(Debug, Error)]
pub enum SocialError {
    /// Registration attempted with a username that is already taken.
    ///
    /// Usernames are matched case-sensitively and are unique for the
    /// lifetime of the process.
    #[error("username {0:?} already registered")]
    DuplicateUsername(String),

    /// Login failed.
    ///
    /// An unknown username and a wrong credential are deliberately
    /// reported identically.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Referenced user does not exist in the directory.
    #[error("user {0:?} not found")]
    UserNotFound(String),

    /// Referenced post does not exist.
    ///
    /// Owner-scoped operations such as deletion also report this when the
    /// post exists but belongs to someone else.
    #[error("post {0} not found")]
    PostNotFound(PostId),

    /// No pending friend request from the named user.
    #[error("no pending friend request from {0:?}")]
    RequestNotFound(String),

    /// Invalid argument or API misuse.
    ///
    /// This occurs for stale user handles, reserved id values, content
    /// exceeding a configured ceiling, or an invalid log filter.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
