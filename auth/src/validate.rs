//! Input validation shared by authentication collaborators.

use regex::Regex;
use std::sync::OnceLock;

/// Permissive email pattern: local part, `@`, domain labels, and a TLD of
/// at least two letters.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9+_.-]+@([A-Za-z0-9.-]+\.[A-Za-z]{2,})$";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

/// Whether a string looks like an email address.
///
/// ```
/// use taskstore_auth::validate::is_valid_email;
///
/// assert!(is_valid_email("user@example.com"));
/// assert!(!is_valid_email("not-an-email"));
/// ```
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    #[allow(clippy::expect_used)] // hardcoded pattern always compiles
    let regex = EMAIL_REGEX
        .get_or_init(|| Regex::new(EMAIL_PATTERN).expect("hardcoded email pattern should always compile"));
    regex.is_match(email)
}
