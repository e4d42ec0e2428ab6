//! Session environment.
//!
//! This module defines the environment type for dependency injection in the
//! session reducer. Both collaborators are process-lifetime singletons,
//! assembled exactly once by whoever wires the application together.

use crate::providers::{AuthClient, SessionStore};

/// Session environment.
///
/// Contains the external dependencies needed by the session reducer.
///
/// # Type Parameters
///
/// - `C`: Authentication collaborator
/// - `S`: Session record persistence
#[derive(Clone)]
pub struct AuthEnvironment<C, S>
where
    C: AuthClient + Clone,
    S: SessionStore + Clone,
{
    /// Authentication collaborator answering login attempts.
    pub client: C,

    /// Local persistence for the session record.
    pub sessions: S,
}

impl<C, S> AuthEnvironment<C, S>
where
    C: AuthClient + Clone,
    S: SessionStore + Clone,
{
    /// Create a new session environment.
    #[must_use]
    pub const fn new(client: C, sessions: S) -> Self {
        Self { client, sessions }
    }
}
