//! Loose email shape check
//!
//! Accepts `local@domain.tld` where no part contains whitespace or `@`.
//! This is a form hint, not RFC 5322 validation; the auth provider has the
//! final say.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Check whether `text` looks like an email address
pub fn is_valid_email(text: &str) -> bool {
    EMAIL_RE.is_match(text)
}
