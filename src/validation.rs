//! Input validation helpers
//!
//! Pure functions with no side effects; validation failures are reported by the
//! caller, never logged here.

use once_cell::sync::Lazy;
use regex::Regex;

// Deliberately permissive: one dot in the domain segment, no whitespace or '@'
// anywhere else. Tightening this would change observable behavior.
static RE_EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Check whether `email` matches the accepted `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    RE_EMAIL.is_match(email)
}

/// Check whether `name` is non-empty after trimming surrounding whitespace.
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}
