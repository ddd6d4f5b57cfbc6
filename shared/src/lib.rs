mod controller;
mod form;
mod redirect;
mod types;
mod validation;

pub use controller::{AuthClient, LoginController, SessionHandle, SubmitOutcome};
pub use form::{FormState, LoginForm, SubmitStep};
pub use redirect::{redirect_for, redirect_target, DEFAULT_REDIRECT};
pub use types::*;
pub use validation::{
    is_valid_email, validate, validate_email, validate_password, FieldError, FieldErrors,
};
