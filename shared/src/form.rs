use crate::types::{AuthError, Credentials};
use crate::validation::{validate, FieldErrors};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Error(AuthError),
    Success,
}

/// What the caller should do after asking the form to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStep {
    /// Send exactly these credentials to the auth endpoint.
    Send(Credentials),
    /// Validation failed; nothing is sent.
    Invalid(FieldErrors),
    /// A request is already in flight or the login already succeeded.
    Ignored,
}

/// Login form state machine. Knows nothing about HTTP or the session; the
/// caller feeds it submit attempts and server responses.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    state: FormState,
    field_errors: FieldErrors,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn field_errors(&self) -> FieldErrors {
        self.field_errors
    }

    pub fn is_loading(&self) -> bool {
        self.state == FormState::Submitting
    }

    pub fn is_done(&self) -> bool {
        self.state == FormState::Success
    }

    /// Banner text, if the last attempt failed.
    pub fn error_message(&self) -> Option<String> {
        match &self.state {
            FormState::Error(err) => Some(err.message()),
            _ => None,
        }
    }

    pub fn submit(&mut self, credentials: &Credentials) -> SubmitStep {
        if matches!(self.state, FormState::Submitting | FormState::Success) {
            return SubmitStep::Ignored;
        }

        // Any new attempt replaces the previous banner.
        self.state = FormState::Idle;

        match validate(credentials) {
            Ok(cleaned) => {
                self.field_errors = FieldErrors::default();
                self.state = FormState::Submitting;
                SubmitStep::Send(cleaned)
            }
            Err(errors) => {
                self.field_errors = errors;
                SubmitStep::Invalid(errors)
            }
        }
    }

    /// Records the outcome of the in-flight request. Returns `true` when the
    /// login succeeded and the session should be refreshed.
    pub fn resolve(&mut self, result: Result<(), AuthError>) -> bool {
        if self.state != FormState::Submitting {
            log::warn!("Dropping login response with no request in flight");
            return false;
        }
        match result {
            Ok(()) => {
                self.state = FormState::Success;
                true
            }
            Err(err) => {
                self.state = FormState::Error(err);
                false
            }
        }
    }

    /// Reopens the form after a login the session never picked up.
    /// Returns `true` if there was a finished login to undo.
    pub fn reset(&mut self) -> bool {
        if self.state != FormState::Success {
            return false;
        }
        self.state = FormState::Idle;
        true
    }

    /// Closes the error banner.
    pub fn dismiss_error(&mut self) {
        if matches!(self.state, FormState::Error(_)) {
            self.state = FormState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldError;

    fn valid() -> Credentials {
        Credentials::new("user@test.com", "secret", true)
    }

    #[test]
    fn valid_submit_starts_loading() {
        let mut form = LoginForm::new();
        assert_eq!(form.submit(&valid()), SubmitStep::Send(valid()));
        assert!(form.is_loading());
    }

    #[test]
    fn invalid_submit_stays_idle() {
        let mut form = LoginForm::new();
        let step = form.submit(&Credentials::new("bad", "secret", true));
        assert!(matches!(step, SubmitStep::Invalid(_)));
        assert_eq!(form.state(), &FormState::Idle);
        assert_eq!(form.field_errors().email, Some(FieldError::EmailMalformed));
    }

    #[test]
    fn submit_while_loading_is_ignored() {
        let mut form = LoginForm::new();
        form.submit(&valid());
        assert_eq!(form.submit(&valid()), SubmitStep::Ignored);
        assert!(form.is_loading());
    }

    #[test]
    fn error_code_sets_banner_and_clears_loading() {
        let mut form = LoginForm::new();
        form.submit(&valid());
        assert!(!form.resolve(Err(AuthError::InvalidCredentials)));
        assert!(!form.is_loading());
        assert_eq!(form.error_message().as_deref(), Some("Incorrect password"));
    }

    #[test]
    fn success_is_terminal() {
        let mut form = LoginForm::new();
        form.submit(&valid());
        assert!(form.resolve(Ok(())));
        assert!(form.is_done());
        assert_eq!(form.error_message(), None);
        assert_eq!(form.submit(&valid()), SubmitStep::Ignored);
    }

    #[test]
    fn resubmit_after_error_clears_banner() {
        let mut form = LoginForm::new();
        form.submit(&valid());
        form.resolve(Err(AuthError::RateLimited));

        assert!(matches!(form.submit(&valid()), SubmitStep::Send(_)));
        assert_eq!(form.error_message(), None);
    }

    #[test]
    fn invalid_resubmit_after_error_also_clears_banner() {
        let mut form = LoginForm::new();
        form.submit(&valid());
        form.resolve(Err(AuthError::UnknownAccount));

        form.submit(&Credentials::new("", "secret", true));
        assert_eq!(form.state(), &FormState::Idle);
        assert_eq!(form.field_errors().email, Some(FieldError::EmailMissing));
    }

    #[test]
    fn field_errors_clear_on_valid_submit() {
        let mut form = LoginForm::new();
        form.submit(&Credentials::new("", "", true));
        form.submit(&valid());
        assert!(form.field_errors().is_empty());
    }

    #[test]
    fn dismiss_returns_to_idle() {
        let mut form = LoginForm::new();
        form.submit(&valid());
        form.resolve(Err(AuthError::Unrecognized(-9)));
        form.dismiss_error();
        assert_eq!(form.state(), &FormState::Idle);
    }

    #[test]
    fn reset_reopens_a_finished_form() {
        let mut form = LoginForm::new();
        form.submit(&valid());
        form.resolve(Ok(()));

        assert!(form.reset());
        assert_eq!(form.state(), &FormState::Idle);
        assert!(matches!(form.submit(&valid()), SubmitStep::Send(_)));
    }

    #[test]
    fn reset_leaves_other_states_alone() {
        let mut form = LoginForm::new();
        assert!(!form.reset());

        form.submit(&valid());
        assert!(!form.reset());
        assert!(form.is_loading());

        form.resolve(Err(AuthError::RateLimited));
        assert!(!form.reset());
        assert_eq!(form.error_message().as_deref(), Some("Request too often"));
    }

    #[test]
    fn stray_response_is_dropped() {
        let mut form = LoginForm::new();
        assert!(!form.resolve(Ok(())));
        assert_eq!(form.state(), &FormState::Idle);
    }
}
