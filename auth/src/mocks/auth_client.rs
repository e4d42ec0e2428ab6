//! Mock authentication client.

use crate::error::{AuthError, Result};
use crate::providers::{AuthClient, LoginRequest, LoginResponse, UserPayload};
use crate::validate::is_valid_email;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use taskstore_core::environment::Clock;

/// The one email the mock service accepts.
pub const DEMO_EMAIL: &str = "user@example.com";

/// The one password the mock service accepts.
pub const DEMO_PASSWORD: &str = "password";

/// Deterministic stand-in for the authentication service.
///
/// Recognises exactly [`DEMO_EMAIL`] / [`DEMO_PASSWORD`]; every other input
/// is rejected with the message a caller would show the user. The token in
/// a successful response is derived from the injected clock, so tests with
/// a fixed clock get reproducible tokens.
#[derive(Clone)]
pub struct MockAuthClient {
    clock: Arc<dyn Clock>,
    latency: Duration,
}

impl MockAuthClient {
    /// Create a mock client answering immediately.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            latency: Duration::ZERO,
        }
    }

    /// Simulate network latency before each response.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn respond(&self, request: &LoginRequest) -> LoginResponse {
        if request.email == DEMO_EMAIL && request.password == DEMO_PASSWORD {
            LoginResponse {
                success: true,
                message: "Login successful".to_string(),
                token: Some(format!(
                    "mock_jwt_token_{}",
                    self.clock.now().timestamp_millis()
                )),
                user: Some(UserPayload {
                    id: "123456".to_string(),
                    email: request.email.clone(),
                    name: "Demo User".to_string(),
                }),
            }
        } else if request.email.trim().is_empty() || request.password.trim().is_empty() {
            LoginResponse::failure("Email and password are required")
        } else if !is_valid_email(&request.email) {
            LoginResponse::failure("Please enter a valid email address")
        } else {
            LoginResponse::failure("Invalid email or password")
        }
    }
}

impl AuthClient for MockAuthClient {
    fn login(&self, request: LoginRequest) -> impl Future<Output = Result<LoginResponse>> + Send {
        let response = self.respond(&request);
        let latency = self.latency;

        async move {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            Ok(response)
        }
    }
}

/// A collaborator whose transport always fails.
///
/// Models the "exception from the network layer" arm of the login flow.
#[derive(Clone)]
pub struct FailingAuthClient {
    message: String,
}

impl FailingAuthClient {
    /// Create a client that fails with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl AuthClient for FailingAuthClient {
    fn login(&self, _request: LoginRequest) -> impl Future<Output = Result<LoginResponse>> + Send {
        let message = self.message.clone();
        async move { Err(AuthError::Transport(message)) }
    }
}
