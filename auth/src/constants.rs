//! Session constants.

use std::time::Duration;

/// How long a login attempt may take before it is reported as a transport
/// failure.
pub const LOGIN_TIMEOUT: Duration = Duration::from_secs(30);

/// Display name used when the login response carries no user payload.
pub const DEFAULT_DISPLAY_NAME: &str = "User";
