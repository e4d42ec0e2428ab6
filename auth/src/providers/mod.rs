//! Collaborator traits and the login wire contract.
//!
//! Collaborators are abstracted behind traits so the reducer can be wired
//! to a real transport, a deterministic mock, or anything in between. The
//! wire types carry the exact field names of the login contract.

mod auth_client;
mod session_store;

pub use auth_client::AuthClient;
pub use session_store::SessionStore;

use serde::{Deserialize, Serialize};

/// A login request: the submitted credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Submitted email address.
    pub email: String,

    /// Submitted password.
    pub password: String,
}

/// A login response.
///
/// Both accepted and rejected attempts arrive as a well-formed response;
/// `success` distinguishes them and `message` is always human-readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Whether the attempt was accepted.
    pub success: bool,

    /// Human-readable outcome message.
    pub message: String,

    /// Session token; present only on success.
    #[serde(default)]
    pub token: Option<String>,

    /// User payload; present only on success.
    #[serde(default)]
    pub user: Option<UserPayload>,
}

impl LoginResponse {
    /// Build a rejection response with the given message.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            token: None,
            user: None,
        }
    }
}

/// The user block of a successful login response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    /// User id.
    pub id: String,

    /// Email address.
    pub email: String,

    /// Display name.
    pub name: String,
}
