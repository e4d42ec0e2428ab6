//! Session actions.
//!
//! Login is a two-step flow: `LoginRequested` carries the credentials into
//! an effect that calls the authentication collaborator, and
//! `LoginCompleted` feeds the outcome back through the reducer. `LoggedOut`
//! clears the session.

use crate::error::AuthError;
use crate::providers::LoginResponse;

/// Actions accepted by the session reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    /// A login attempt with the submitted credentials.
    LoginRequested {
        /// Submitted email address.
        email: String,
        /// Submitted password.
        password: String,
    },

    /// The collaborator's answer to a login attempt.
    ///
    /// Carries the submitted email so user fields absent from the response
    /// payload can fall back to it.
    LoginCompleted {
        /// Email the attempt was made with.
        email: String,
        /// Response payload, or the transport failure that prevented one.
        outcome: Result<LoginResponse, AuthError>,
    },

    /// End the current session.
    LoggedOut,
}
