//! Authentication collaborator trait.

use super::{LoginRequest, LoginResponse};
use crate::error::Result;
use std::future::Future;

/// The authentication collaborator.
///
/// Abstracts over whatever answers login attempts: a network service in
/// production, a deterministic mock in tests and demos.
///
/// # Contract
///
/// For well-formed but rejected credentials the collaborator returns
/// `Ok(LoginResponse { success: false, .. })`; an `Err` means the transport
/// itself failed before producing an answer.
pub trait AuthClient: Send + Sync {
    /// Attempt a login with the given credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Transport`](crate::error::AuthError::Transport)
    /// if the collaborator fails before producing a response.
    fn login(&self, request: LoginRequest) -> impl Future<Output = Result<LoginResponse>> + Send;
}
