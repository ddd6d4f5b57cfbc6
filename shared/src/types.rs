use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Form Input
// ============================================================================

/// What the user typed into the login form.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>, remember: bool) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            remember,
        }
    }
}

// Keeps the password out of log lines.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("remember", &self.remember)
            .finish()
    }
}

impl Default for Credentials {
    fn default() -> Self {
        // The remember-me box starts out checked.
        Self::new(String::new(), String::new(), true)
    }
}

// ============================================================================
// Result Codes
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    Ok,
    InvalidCredentials,
    RateLimited,
    UnknownAccount,
    Other(i32),
}

impl ResultCode {
    pub const OK: i32 = 0;
    pub const INVALID_CREDENTIALS: i32 = -1;
    pub const RATE_LIMITED: i32 = -4;
    pub const UNKNOWN_ACCOUNT: i32 = -5;

    pub fn from_code(code: i32) -> Self {
        match code {
            Self::OK => ResultCode::Ok,
            Self::INVALID_CREDENTIALS => ResultCode::InvalidCredentials,
            Self::RATE_LIMITED => ResultCode::RateLimited,
            Self::UNKNOWN_ACCOUNT => ResultCode::UnknownAccount,
            other => ResultCode::Other(other),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            ResultCode::Ok => Self::OK,
            ResultCode::InvalidCredentials => Self::INVALID_CREDENTIALS,
            ResultCode::RateLimited => Self::RATE_LIMITED,
            ResultCode::UnknownAccount => Self::UNKNOWN_ACCOUNT,
            ResultCode::Other(code) => *code,
        }
    }

    /// `Ok(())` for success, otherwise the error the banner should show.
    pub fn into_result(self) -> Result<(), AuthError> {
        match self {
            ResultCode::Ok => Ok(()),
            ResultCode::InvalidCredentials => Err(AuthError::InvalidCredentials),
            ResultCode::RateLimited => Err(AuthError::RateLimited),
            ResultCode::UnknownAccount => Err(AuthError::UnknownAccount),
            ResultCode::Other(code) => Err(AuthError::Unrecognized(code)),
        }
    }
}

// ============================================================================
// API Types
// ============================================================================

/// Body of the response to a login request. Anything besides `code` is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub code: i32,
}

impl LoginResponse {
    pub fn result_code(&self) -> ResultCode {
        ResultCode::from_code(self.code)
    }
}

// ============================================================================
// Errors
// ============================================================================

/// A failed login attempt. `Display` is the text shown in the error banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Incorrect password")]
    InvalidCredentials,
    #[error("Request too often")]
    RateLimited,
    #[error("Email did not exist")]
    UnknownAccount,
    #[error("Unknown error")]
    Unrecognized(i32),
    #[error("Unknown error")]
    Transport(String),
}

impl AuthError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}
