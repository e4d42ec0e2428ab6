//! Session state types.
//!
//! The in-memory session is an `Option<UserInfo>`: the logged-in flag is
//! derived from presence, which makes "a user record exists if and only if
//! someone is logged in" structural rather than a convention to uphold.

use serde::{Deserialize, Serialize};

/// The authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// User id as reported by the authentication service.
    pub id: String,

    /// Email address the user is known by.
    pub email: String,

    /// Display name.
    pub name: String,

    /// Session token issued at login.
    pub token: String,
}

/// Root session state.
///
/// This is the state managed by the auth reducer and delivered, whole, to
/// every snapshot subscriber.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Current user (if logged in).
    pub session: Option<UserInfo>,
}

impl SessionState {
    /// Whether a user is currently logged in.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    /// The current user, if logged in.
    #[must_use]
    pub const fn current_user(&self) -> Option<&UserInfo> {
        self.session.as_ref()
    }
}

/// The persisted session record.
///
/// Mirrors the key-value batch the session is stored as: one boolean flag
/// plus four optional string fields, written together on login and cleared
/// together on logout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Whether a login was recorded.
    #[serde(default)]
    pub logged_in: bool,

    /// Persisted user id.
    #[serde(default)]
    pub user_id: Option<String>,

    /// Persisted email.
    #[serde(default)]
    pub user_email: Option<String>,

    /// Persisted display name.
    #[serde(default)]
    pub user_name: Option<String>,

    /// Persisted session token.
    #[serde(default)]
    pub user_token: Option<String>,
}

impl SessionRecord {
    /// Build the record persisted for a logged-in user.
    #[must_use]
    pub fn for_user(user: &UserInfo) -> Self {
        Self {
            logged_in: true,
            user_id: Some(user.id.clone()),
            user_email: Some(user.email.clone()),
            user_name: Some(user.name.clone()),
            user_token: Some(user.token.clone()),
        }
    }

    /// Rebuild the user this record was saved for.
    ///
    /// Only a complete record restores a session: the flag must be set and
    /// all four fields present. Anything less rehydrates as logged out.
    #[must_use]
    pub fn restored_user(&self) -> Option<UserInfo> {
        if !self.logged_in {
            return None;
        }

        match (
            &self.user_id,
            &self.user_email,
            &self.user_name,
            &self.user_token,
        ) {
            (Some(id), Some(email), Some(name), Some(token)) => Some(UserInfo {
                id: id.clone(),
                email: email.clone(),
                name: name.clone(),
                token: token.clone(),
            }),
            _ => None,
        }
    }
}
