//! Reducer logic for the session.
//!
//! Login delegates to the injected collaborator through an effect and the
//! outcome feeds back as `LoginCompleted`. Session state only changes on a
//! successful outcome or a logout; every failure arm leaves it untouched.

use crate::actions::AuthAction;
use crate::constants::DEFAULT_DISPLAY_NAME;
use crate::environment::AuthEnvironment;
use crate::providers::{AuthClient, LoginRequest, SessionStore};
use crate::state::{SessionRecord, SessionState, UserInfo};
use taskstore_core::{
    effect::{Effect, Effects},
    reducer::Reducer,
    smallvec,
};

/// Reducer for the session.
///
/// Generic over the same collaborator types as its environment; the
/// phantom field only pins those parameters.
#[derive(Clone, Debug)]
pub struct AuthReducer<C, S> {
    _collaborators: std::marker::PhantomData<fn() -> (C, S)>,
}

impl<C, S> AuthReducer<C, S> {
    /// Creates a new `AuthReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _collaborators: std::marker::PhantomData,
        }
    }
}

impl<C, S> Default for AuthReducer<C, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, S> Reducer for AuthReducer<C, S>
where
    C: AuthClient + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    type State = SessionState;
    type Action = AuthAction;
    type Environment = AuthEnvironment<C, S>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Effects<Self::Action> {
        match action {
            AuthAction::LoginRequested { email, password } => {
                tracing::debug!(%email, "Login requested");
                let client = env.client.clone();
                let request = LoginRequest {
                    email: email.clone(),
                    password,
                };

                smallvec![Effect::future(async move {
                    let outcome = client.login(request).await;
                    Some(AuthAction::LoginCompleted { email, outcome })
                })]
            }

            AuthAction::LoginCompleted { email, outcome } => match outcome {
                Ok(response) if response.success => {
                    let user = UserInfo {
                        id: response
                            .user
                            .as_ref()
                            .map(|u| u.id.clone())
                            .unwrap_or_default(),
                        email: response
                            .user
                            .as_ref()
                            .map_or(email, |u| u.email.clone()),
                        name: response
                            .user
                            .as_ref()
                            .map_or_else(|| DEFAULT_DISPLAY_NAME.to_string(), |u| u.name.clone()),
                        token: response.token.unwrap_or_default(),
                    };

                    tracing::debug!(email = %user.email, "Login succeeded");
                    let record = SessionRecord::for_user(&user);
                    state.session = Some(user);

                    let sessions = env.sessions.clone();
                    smallvec![Effect::future(async move {
                        if let Err(error) = sessions.save(&record).await {
                            tracing::warn!(%error, "Failed to persist session record");
                        }
                        None
                    })]
                }

                Ok(response) => {
                    tracing::debug!(message = %response.message, "Login rejected");
                    Effects::new()
                }

                Err(error) => {
                    tracing::warn!(%error, "Login transport failure");
                    Effects::new()
                }
            },

            AuthAction::LoggedOut => {
                tracing::debug!("Logging out");
                state.session = None;

                let sessions = env.sessions.clone();
                smallvec![Effect::future(async move {
                    if let Err(error) = sessions.clear().await {
                        tracing::warn!(%error, "Failed to clear persisted session record");
                    }
                    None
                })]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthError;
    use crate::mocks::{InMemorySessionStore, MockAuthClient};
    use crate::providers::{LoginResponse, UserPayload};
    use std::sync::Arc;
    use taskstore_testing::{ReducerTest, assertions, test_clock};

    fn test_env() -> AuthEnvironment<MockAuthClient, InMemorySessionStore> {
        AuthEnvironment::new(
            MockAuthClient::new(Arc::new(test_clock())),
            InMemorySessionStore::new(),
        )
    }

    fn success_response() -> LoginResponse {
        LoginResponse {
            success: true,
            message: "Login successful".to_string(),
            token: Some("tok".to_string()),
            user: Some(UserPayload {
                id: "123456".to_string(),
                email: "user@example.com".to_string(),
                name: "Demo User".to_string(),
            }),
        }
    }

    #[test]
    fn login_request_produces_an_effect_without_touching_state() {
        ReducerTest::new(AuthReducer::new())
            .with_env(test_env())
            .given_state(SessionState::default())
            .when_action(AuthAction::LoginRequested {
                email: "user@example.com".to_string(),
                password: "password".to_string(),
            })
            .then_state(|state| {
                assert!(!state.is_logged_in());
            })
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn successful_outcome_sets_the_session_and_persists() {
        ReducerTest::new(AuthReducer::new())
            .with_env(test_env())
            .given_state(SessionState::default())
            .when_action(AuthAction::LoginCompleted {
                email: "user@example.com".to_string(),
                outcome: Ok(success_response()),
            })
            .then_state(|state| {
                assert!(state.is_logged_in());
                let user = state.current_user().unwrap();
                assert_eq!(user.id, "123456");
                assert_eq!(user.email, "user@example.com");
                assert_eq!(user.name, "Demo User");
                assert_eq!(user.token, "tok");
            })
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn absent_payload_fields_fall_back_to_defaults() {
        ReducerTest::new(AuthReducer::new())
            .with_env(test_env())
            .given_state(SessionState::default())
            .when_action(AuthAction::LoginCompleted {
                email: "someone@example.org".to_string(),
                outcome: Ok(LoginResponse {
                    success: true,
                    message: "Login successful".to_string(),
                    token: None,
                    user: None,
                }),
            })
            .then_state(|state| {
                let user = state.current_user().unwrap();
                assert_eq!(user.id, "");
                assert_eq!(user.email, "someone@example.org");
                assert_eq!(user.name, "User");
                assert_eq!(user.token, "");
            })
            .run();
    }

    #[test]
    fn rejected_outcome_leaves_the_session_unchanged() {
        ReducerTest::new(AuthReducer::new())
            .with_env(test_env())
            .given_state(SessionState::default())
            .when_action(AuthAction::LoginCompleted {
                email: "wrong@example.com".to_string(),
                outcome: Ok(LoginResponse::failure("Invalid email or password")),
            })
            .then_state(|state| {
                assert!(!state.is_logged_in());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn transport_failure_leaves_the_session_unchanged() {
        ReducerTest::new(AuthReducer::new())
            .with_env(test_env())
            .given_state(SessionState::default())
            .when_action(AuthAction::LoginCompleted {
                email: "user@example.com".to_string(),
                outcome: Err(AuthError::Transport("connection reset".to_string())),
            })
            .then_state(|state| {
                assert!(!state.is_logged_in());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn logout_clears_the_session_and_schedules_the_erase() {
        let logged_in = SessionState {
            session: Some(UserInfo {
                id: "123456".to_string(),
                email: "user@example.com".to_string(),
                name: "Demo User".to_string(),
                token: "tok".to_string(),
            }),
        };

        ReducerTest::new(AuthReducer::new())
            .with_env(test_env())
            .given_state(logged_in)
            .when_action(AuthAction::LoggedOut)
            .then_state(|state| {
                assert!(!state.is_logged_in());
                assert!(state.current_user().is_none());
            })
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }
}
