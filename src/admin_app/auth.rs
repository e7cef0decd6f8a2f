/**
 * Authentication Module
 *
 * Login and registration form state. Each flow moves
 * Idle -> Submitting -> Succeeded | Failed; the network call itself is made
 * between `begin` and `finish` so the UI can run it off its own thread.
 */

use crate::admin_app::api::AuthBackend;
use crate::admin_app::types::{AppView, Navigator};
use crate::shared::auth::{LoginRequest, RegisterRequest};
use crate::shared::error::{ApiError, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Authentication state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub phase: AuthPhase,
    /// Backend confirmation from the last successful submit
    pub message: Option<String>,
    pub error: Option<String>,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == AuthPhase::Submitting
    }

    pub fn clear_messages(&mut self) {
        self.message = None;
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
    }

    fn start(&mut self) {
        self.phase = AuthPhase::Submitting;
    }

    fn succeed(&mut self, message: String) {
        self.phase = AuthPhase::Succeeded;
        self.message = Some(message);
    }

    fn fail(&mut self, error: &ApiError) {
        self.phase = AuthPhase::Failed;
        self.error = Some(error.to_string());
    }
}

/// Login form
#[derive(Debug, Clone, Default)]
pub struct LoginFlow {
    pub form: LoginRequest,
    pub state: AuthState,
}

impl LoginFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.state.is_loading() {
            "Logging in..."
        } else {
            "Login"
        }
    }

    /// Clear old messages and enter Submitting.
    ///
    /// Returns the request to send, or `None` if a submit is already running.
    pub fn begin(&mut self) -> Option<LoginRequest> {
        if self.state.is_loading() {
            return None;
        }
        self.state.clear_messages();
        self.state.start();
        Some(self.form.clone())
    }

    /// Apply the backend's answer; navigates home on success only
    pub fn finish(&mut self, result: Result<String, ApiError>, navigator: &mut impl Navigator) {
        match result {
            Ok(message) => {
                tracing::info!("Login succeeded for {}", self.form.email);
                self.state.succeed(message);
                navigator.navigate(AppView::Home);
            }
            Err(e) => {
                tracing::error!("Login failed: {}", e);
                self.state.fail(&e);
            }
        }
    }

    /// Run the whole flow on the calling thread
    pub fn submit(&mut self, backend: &impl AuthBackend, navigator: &mut impl Navigator) {
        if let Some(request) = self.begin() {
            let result = backend.login(&request);
            self.finish(result, navigator);
        }
    }
}

/// Registration form
#[derive(Debug, Clone, Default)]
pub struct RegisterFlow {
    pub form: RegisterRequest,
    pub state: AuthState,
}

impl RegisterFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.state.is_loading() {
            "Registering..."
        } else {
            "Register"
        }
    }

    /// Clear old messages, check the password confirmation, enter Submitting.
    ///
    /// A mismatch sets the error and returns `None` without entering Submitting.
    pub fn begin(&mut self) -> Option<RegisterRequest> {
        if self.state.is_loading() {
            return None;
        }
        self.state.clear_messages();

        if self.form.password != self.form.confirm_password {
            self.state.set_error(ValidationError::PasswordMismatch.to_string());
            return None;
        }

        self.state.start();
        Some(self.form.clone())
    }

    /// Apply the backend's answer; success clears the form, no redirect
    pub fn finish(&mut self, result: Result<String, ApiError>) {
        match result {
            Ok(message) => {
                tracing::info!("Registered {}", self.form.email);
                self.state.succeed(message);
                self.form = RegisterRequest::default();
            }
            Err(e) => {
                tracing::error!("Registration failed: {}", e);
                self.state.fail(&e);
            }
        }
    }

    /// Run the whole flow on the calling thread
    pub fn submit(&mut self, backend: &impl AuthBackend) {
        if let Some(request) = self.begin() {
            let result = backend.register(&request);
            self.finish(result);
        }
    }
}
