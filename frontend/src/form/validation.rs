//! Client-side checks run before anything is sent.
//!
//! Rules run in a fixed order and the first failure wins; errors are never
//! aggregated.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;
use crate::types::{Field, FormSnapshot};

/// `local@domain.tld`, no whitespace, byte order mark or extra `@` in any part.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("valid email pattern")
});

type Rule = fn(&FormSnapshot) -> Result<(), ValidationError>;

const RULES: &[Rule] = &[require_name, require_contact, check_email];

/// Validate a snapshot, returning the first failing rule.
pub fn validate(snapshot: &FormSnapshot) -> Result<(), ValidationError> {
    RULES.iter().try_for_each(|rule| rule(snapshot))
}

/// Whether `email` has the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn require_name(snapshot: &FormSnapshot) -> Result<(), ValidationError> {
    if snapshot.trimmed(Field::Name).is_empty() {
        return Err(ValidationError::MissingName);
    }
    Ok(())
}

fn require_contact(snapshot: &FormSnapshot) -> Result<(), ValidationError> {
    if snapshot.trimmed(Field::Phone).is_empty() && snapshot.trimmed(Field::Email).is_empty() {
        return Err(ValidationError::MissingContact);
    }
    Ok(())
}

fn check_email(snapshot: &FormSnapshot) -> Result<(), ValidationError> {
    let email = snapshot.trimmed(Field::Email);
    if !email.is_empty() && !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}
