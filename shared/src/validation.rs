use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::types::Credentials;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern is valid")
});

/// Inline message shown under a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please input your Email!")]
    EmailMissing,
    #[error("The input is not valid Email!")]
    EmailMalformed,
    #[error("Please input your Password!")]
    PasswordMissing,
}

/// Per-field outcome of validating the whole form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_email(email: &str) -> Option<FieldError> {
    let email = email.trim();
    if email.is_empty() {
        Some(FieldError::EmailMissing)
    } else if !is_valid_email(email) {
        Some(FieldError::EmailMalformed)
    } else {
        None
    }
}

pub fn validate_password(password: &str) -> Option<FieldError> {
    password.is_empty().then_some(FieldError::PasswordMissing)
}

/// Checks every field, returning the cleaned-up credentials or all field errors at once.
pub fn validate(credentials: &Credentials) -> Result<Credentials, FieldErrors> {
    let errors = FieldErrors {
        email: validate_email(&credentials.email),
        password: validate_password(&credentials.password),
    };
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(Credentials {
        email: credentials.email.trim().to_string(),
        ..credentials.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        for email in ["user@test.com", "first.last+tag@mail.example.org", "a@b.co"] {
            assert!(is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "user",
            "user@",
            "@test.com",
            "user@test",
            "user@@test.com",
            "us er@test.com",
            "user@test..com",
            "user@.com",
        ] {
            assert!(!is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn reports_every_failing_field() {
        let errors = validate(&Credentials::new("", "", true)).unwrap_err();
        assert_eq!(errors.email, Some(FieldError::EmailMissing));
        assert_eq!(errors.password, Some(FieldError::PasswordMissing));
    }

    #[test]
    fn malformed_email_with_password_still_fails() {
        let errors = validate(&Credentials::new("nope", "secret", true)).unwrap_err();
        assert_eq!(errors.email, Some(FieldError::EmailMalformed));
        assert_eq!(errors.password, None);
        assert_eq!(
            errors.email.map(|e| e.to_string()).as_deref(),
            Some("The input is not valid Email!")
        );
    }

    #[test]
    fn whitespace_only_email_counts_as_missing() {
        assert_eq!(validate_email("   "), Some(FieldError::EmailMissing));
    }

    #[test]
    fn valid_input_is_trimmed() {
        let creds = validate(&Credentials::new("  user@test.com ", " secret", false)).unwrap();
        assert_eq!(creds.email, "user@test.com");
        // Passwords are sent exactly as typed.
        assert_eq!(creds.password, " secret");
        assert!(!creds.remember);
    }
}
