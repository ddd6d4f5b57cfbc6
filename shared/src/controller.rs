use std::cell::{Cell, Ref, RefCell};

use crate::form::{LoginForm, SubmitStep};
use crate::types::{AuthError, Credentials, LoginResponse};
use crate::validation::FieldErrors;

/// Remote authentication endpoint.
#[allow(async_fn_in_trait)]
pub trait AuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError>;
}

/// Read side of the app-wide session plus its refresh signal.
pub trait SessionHandle {
    fn is_logged_in(&self) -> bool;

    /// Asks the session to re-check authentication. Fire-and-forget.
    fn refresh(&self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid(FieldErrors),
    /// Another attempt is in flight, or a login already succeeded and the
    /// session check is pending.
    Busy,
    LoggedIn,
    Failed(AuthError),
    /// The page went away before the response arrived.
    Discarded,
}

/// Drives one login form against an auth client and a session.
///
/// Everything runs on a single thread, so interior mutability is plain
/// `RefCell`/`Cell`. No borrow is held across the `login` await.
pub struct LoginController<C, S> {
    form: RefCell<LoginForm>,
    client: C,
    session: S,
    detached: Cell<bool>,
}

impl<C: AuthClient, S: SessionHandle> LoginController<C, S> {
    pub fn new(client: C, session: S) -> Self {
        Self {
            form: RefCell::new(LoginForm::new()),
            client,
            session,
            detached: Cell::new(false),
        }
    }

    pub fn form(&self) -> Ref<'_, LoginForm> {
        self.form.borrow()
    }

    pub fn dismiss_error(&self) {
        self.form.borrow_mut().dismiss_error();
    }

    /// Called whenever a session check completes. A successful login that
    /// still reads as logged out gets the form back, so the user can retry.
    /// Returns `true` if the form changed.
    pub fn session_checked(&self, logged_in: bool) -> bool {
        if logged_in {
            return false;
        }
        let reopened = self.form.borrow_mut().reset();
        if reopened {
            log::warn!("Login succeeded but the session is still logged out");
        }
        reopened
    }

    /// Marks the page as gone; any response still in flight is ignored.
    pub fn detach(&self) {
        self.detached.set(true);
    }

    /// Runs the whole attempt: validate, send, record the outcome.
    pub async fn submit(&self, credentials: &Credentials) -> SubmitOutcome {
        match self.begin(credentials) {
            Ok(credentials) => self.finish(credentials).await,
            Err(outcome) => outcome,
        }
    }

    /// Synchronous half of [`submit`](Self::submit). On `Ok` the form is
    /// loading and the returned credentials must be passed to `finish`.
    pub fn begin(&self, credentials: &Credentials) -> Result<Credentials, SubmitOutcome> {
        let step = self.form.borrow_mut().submit(credentials);
        match step {
            SubmitStep::Send(credentials) => Ok(credentials),
            SubmitStep::Invalid(errors) => {
                log::debug!("Login form rejected: {errors:?}");
                Err(SubmitOutcome::Invalid(errors))
            }
            SubmitStep::Ignored => Err(SubmitOutcome::Busy),
        }
    }

    /// Sends credentials accepted by `begin` and applies the response.
    pub async fn finish(&self, credentials: Credentials) -> SubmitOutcome {
        log::info!("Logging in as {}", credentials.email);
        let result = self
            .client
            .login(&credentials)
            .await
            .and_then(|resp| resp.result_code().into_result());

        if self.detached.get() {
            log::debug!("Login response arrived after the page closed; ignoring");
            return SubmitOutcome::Discarded;
        }

        let logged_in = self.form.borrow_mut().resolve(result.clone());
        match result {
            Ok(()) if logged_in => {
                log::info!("Login succeeded; refreshing session");
                self.session.refresh();
                SubmitOutcome::LoggedIn
            }
            Ok(()) => SubmitOutcome::Discarded,
            Err(err) => {
                log::warn!("Login failed: {err:?}");
                SubmitOutcome::Failed(err)
            }
        }
    }
}
