//! Error types for authentication and session operations.

use thiserror::Error;

/// Result type alias for authentication operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Error taxonomy for the session component.
///
/// Expected authentication failures (wrong credentials, malformed email,
/// missing fields) are NOT errors: they travel inside a well-formed
/// [`LoginResponse`](crate::providers::LoginResponse). This enum only covers
/// the unexpected arms, and every variant is recovered at the boundary of
/// the operation that detected it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The authentication collaborator failed before producing a response.
    #[error("Authentication transport failed: {0}")]
    Transport(String),

    /// The local session store failed to read or write the session record.
    #[error("Session storage failed: {0}")]
    Storage(String),
}
