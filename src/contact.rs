//! Contact form checks. Nothing is sent anywhere; the page only simulates a
//! submission once these pass.

use std::fmt;

/// How long the submit button shows "Sending..." before success.
pub const SIMULATED_SEND_MS: i32 = 1500;
/// How long a form message stays on screen.
pub const MESSAGE_VISIBLE_MS: i32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    MissingFields,
    InvalidEmail,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingFields => f.write_str("missing fields"),
            FormError::InvalidEmail => f.write_str("invalid email"),
        }
    }
}

pub fn validate(name: &str, email: &str, message: &str) -> Result<(), FormError> {
    if [name, email, message].iter().any(|f| f.trim().is_empty()) {
        return Err(FormError::MissingFields);
    }
    if !is_valid_email(email.trim()) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

/// `local@domain.tld` shape: no whitespace, exactly one `@`, and a dot in
/// the domain with something on both sides of it.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
