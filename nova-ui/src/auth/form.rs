//! Auth screen state, kept separate from the view so it can be driven in tests.

use crate::auth::error::{ConfigurationError, SubmitError};
use crate::auth::gateway::IdentityGateway;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::Login,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub in_flight: bool,
}

impl AuthForm {
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Mark a submit as started. Returns `false` while one is already in
    /// flight so duplicate submits are dropped.
    pub fn begin_submit(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.error = None;
        true
    }

    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) {
        self.in_flight = false;
        match result {
            Ok(()) => self.error = None,
            Err(e) => {
                dioxus_logger::tracing::warn!("Auth submit failed: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            AuthMode::Login => "Sign in to your account",
            AuthMode::SignUp => "Create a new account",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.in_flight, self.mode) {
            (true, _) => "Processing...",
            (false, AuthMode::Login) => "Sign in",
            (false, AuthMode::SignUp) => "Create account",
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        match self.mode {
            AuthMode::Login => "Need an account? Sign up",
            AuthMode::SignUp => "Already have an account? Sign in",
        }
    }
}

/// Send credentials to the gateway. Success is reported back through the
/// gateway's subscription, not through this result.
pub async fn submit_credentials(
    gateway: Option<&dyn IdentityGateway>,
    mode: AuthMode,
    email: &str,
    password: &str,
) -> Result<(), SubmitError> {
    let gateway = gateway.ok_or(ConfigurationError::GatewayUnavailable)?;
    match mode {
        AuthMode::Login => gateway.sign_in(email, password).await?,
        AuthMode::SignUp => gateway.sign_up(email, password).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::local::LocalGateway;
    use crate::session::{Session, SessionController};
    use crate::shell::state::{AppState, View};
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn labels_follow_mode_and_flight() {
        let mut form = AuthForm::default();
        assert_eq!(form.title(), "Sign in to your account");
        assert_eq!(form.submit_label(), "Sign in");

        form.toggle_mode();
        assert_eq!(form.title(), "Create a new account");
        assert_eq!(form.submit_label(), "Create account");
        assert_eq!(form.toggle_label(), "Already have an account? Sign in");

        assert!(form.begin_submit());
        assert_eq!(form.submit_label(), "Processing...");
    }

    #[test]
    fn duplicate_submit_is_refused_while_in_flight() {
        let mut form = AuthForm::default();
        assert!(form.begin_submit());
        assert!(!form.begin_submit());

        form.finish_submit(Ok(()));
        assert!(!form.in_flight);
        assert!(form.begin_submit());
    }

    #[test]
    fn failure_is_kept_for_display_and_clears_flight() {
        let gateway = LocalGateway::new();
        let mut form = AuthForm::default();
        assert!(form.begin_submit());

        let result = block_on(submit_credentials(
            Some(&gateway),
            AuthMode::Login,
            "a@x.com",
            "secret1",
        ));
        form.finish_submit(result);

        assert!(!form.in_flight);
        assert_eq!(form.error.as_deref(), Some("Invalid email or password."));
    }

    #[test]
    fn new_submit_clears_previous_error() {
        let mut form = AuthForm::default();
        assert!(form.begin_submit());
        form.finish_submit(Err(ConfigurationError::GatewayUnavailable.into()));
        assert!(form.error.is_some());

        assert!(form.begin_submit());
        assert!(form.error.is_none());
    }

    #[test]
    fn missing_gateway_reports_configuration_error_and_keeps_session() {
        let state = Rc::new(RefCell::new(AppState::default()));
        let sink = Rc::clone(&state);
        let _controller = SessionController::start(None, move |identity| {
            sink.borrow_mut().apply_session(identity)
        });

        let mut form = AuthForm {
            email: "a@x.com".to_string(),
            password: "secret1".to_string(),
            ..AuthForm::default()
        };
        assert!(form.begin_submit());
        let result = block_on(submit_credentials(
            None,
            form.mode,
            &form.email,
            &form.password,
        ));
        assert_eq!(
            result,
            Err(SubmitError::Configuration(ConfigurationError::GatewayUnavailable))
        );
        form.finish_submit(result);

        assert_eq!(
            form.error.as_deref(),
            Some("Authentication service is not ready. Please try again.")
        );
        assert!(!form.in_flight);
        assert_eq!(*state.borrow().session(), Session::Anonymous);
        assert_eq!(state.borrow().view(), View::AuthGate);
    }

    #[test]
    fn successful_sign_up_moves_session_through_subscription() {
        let gateway = LocalGateway::new();
        let state = Rc::new(RefCell::new(AppState::default()));
        let sink = Rc::clone(&state);
        let _controller = SessionController::start(Some(&gateway), move |identity| {
            sink.borrow_mut().apply_session(identity)
        });

        let mut views = vec![state.borrow().view()];
        let result = block_on(submit_credentials(
            Some(&gateway),
            AuthMode::SignUp,
            "a@x.com",
            "secret1",
        ));
        assert!(result.is_ok());
        views.push(state.borrow().view());

        assert_eq!(views[0], View::AuthGate);
        match &views[1] {
            View::Main { identity, .. } => assert_eq!(identity.email, "a@x.com"),
            other => panic!("expected main view, got {other:?}"),
        }
    }
}
