//! Declarative validation for the edit-profile form.
//!
//! Two fields, checked before the update mutation may be dispatched. The
//! messages are part of the screen's observable behavior and are kept
//! verbatim, including the password message promising more than the rule
//! checks (see DESIGN.md).

use std::sync::LazyLock;

use regex::Regex;

pub const EMAIL_REQUIRED_MESSAGE: &str = "Email required";
pub const EMAIL_SHAPE_MESSAGE: &str = "Email is required";
pub const PASSWORD_MESSAGE: &str =
    "Must Contain 8 Characters, a Uppercase, a Lowercase, and a Number.";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

/// Per-field validation outcome. `None` means the field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Check the form fields against the schema.
///
/// Email must be present and RFC-shaped. Password, when non-empty, must be at
/// least 8 characters of ASCII letters and digits with at least one of each
/// class present — the language accepted by
/// `^(?=.*[A-Za-z])(?=.*\d)[A-Za-z\d]{8,}$`, spelled out because `regex` has
/// no lookaheads.
pub fn validate_profile(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if email.is_empty() {
        errors.email = Some(EMAIL_REQUIRED_MESSAGE.to_string());
    } else if !EMAIL_RE.is_match(email) {
        errors.email = Some(EMAIL_SHAPE_MESSAGE.to_string());
    }

    if !password.is_empty() && !password_matches(password) {
        errors.password = Some(PASSWORD_MESSAGE.to_string());
    }

    errors
}

fn password_matches(password: &str) -> bool {
    password.len() >= 8
        && password.chars().all(|c| c.is_ascii_alphanumeric())
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
}
