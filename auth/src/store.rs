//! The `AuthStore` handle.
//!
//! A cheap-to-clone facade over the session store. Construction rehydrates
//! the session from local storage; `login` and `logout` drive the reducer
//! and wait for their persistence effects, so callers observe fully
//! committed outcomes.

use crate::actions::AuthAction;
use crate::constants::LOGIN_TIMEOUT;
use crate::environment::AuthEnvironment;
use crate::error::{AuthError, Result};
use crate::providers::{AuthClient, LoginResponse, SessionStore};
use crate::reducer::AuthReducer;
use crate::state::{SessionState, UserInfo};
use taskstore_runtime::Store;
use tokio::sync::watch;

/// Handle to the session store.
///
/// All clones share the same underlying store; the session is a
/// process-lifetime singleton owned by whoever assembled the environment.
#[derive(Clone)]
pub struct AuthStore<C, S>
where
    C: AuthClient + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    store: Store<SessionState, AuthAction, AuthEnvironment<C, S>, AuthReducer<C, S>>,
}

impl<C, S> AuthStore<C, S>
where
    C: AuthClient + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    /// Create the session store, rehydrating any persisted session.
    ///
    /// Only a complete persisted record restores a session; a missing
    /// record or a storage failure starts the store logged out.
    pub async fn new(environment: AuthEnvironment<C, S>) -> Self {
        let restored = match environment.sessions.load().await {
            Ok(record) => record.restored_user(),
            Err(error) => {
                tracing::warn!(%error, "Failed to load persisted session, starting logged out");
                None
            }
        };

        if let Some(user) = &restored {
            tracing::debug!(email = %user.email, "Restored persisted session");
        }

        let initial = SessionState { session: restored };
        Self {
            store: Store::new(initial, AuthReducer::new(), environment),
        }
    }

    /// Attempt a login with the given credentials.
    ///
    /// Returns the collaborator's response: on success the session has been
    /// set and persisted before this returns; a rejected attempt comes back
    /// as `Ok` with `success == false` and leaves the session untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Transport`] if the collaborator failed before
    /// producing a response, or if no outcome arrived within the login
    /// timeout. The session is untouched in either case.
    pub async fn login(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<LoginResponse> {
        let action = AuthAction::LoginRequested {
            email: email.into(),
            password: password.into(),
        };

        let completed = self
            .store
            .send_and_wait_for(
                action,
                |a| matches!(a, AuthAction::LoginCompleted { .. }),
                LOGIN_TIMEOUT,
            )
            .await
            .map_err(|error| AuthError::Transport(error.to_string()))?;

        match completed {
            AuthAction::LoginCompleted { outcome, .. } => outcome,
            // The predicate only matches LoginCompleted
            _ => Err(AuthError::Transport("unexpected login outcome".to_string())),
        }
    }

    /// End the current session.
    ///
    /// The in-memory session is cleared and the persisted record erased
    /// before this returns.
    pub async fn logout(&self) {
        self.store.send(AuthAction::LoggedOut).await.wait().await;
    }

    /// Subscribe to whole-session snapshots.
    ///
    /// The receiver holds the current snapshot and is updated with the new
    /// session state on every committed change.
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<SessionState> {
        self.store.watch()
    }

    /// Whether a user is currently logged in.
    pub async fn is_logged_in(&self) -> bool {
        self.store.state(SessionState::is_logged_in).await
    }

    /// The current user, if logged in.
    pub async fn current_user(&self) -> Option<UserInfo> {
        self.store.state(|s| s.session.clone()).await
    }

    /// Read the current snapshot.
    pub async fn snapshot(&self) -> SessionState {
        self.store.state(Clone::clone).await
    }
}
