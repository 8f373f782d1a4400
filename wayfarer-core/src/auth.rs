use tracing::debug;

/// Shown when either login field is empty.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill all fields";

/// Result of submitting the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Both fields were filled; the caller may leave the login screen.
    Authenticated,
    /// A field was empty; [`LoginForm::error`] now holds the message.
    Rejected,
}

/// Username/password form state.
///
/// There is no credential store: any non-empty pair is accepted.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    error: Option<&'static str>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&mut self) -> LoginOutcome {
        if self.username.is_empty() || self.password.is_empty() {
            debug!("Login rejected: empty field");
            self.error = Some(MISSING_FIELDS_MESSAGE);
            LoginOutcome::Rejected
        } else {
            self.error = None;
            LoginOutcome::Authenticated
        }
    }

    /// Inline error to display under the fields, if any.
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }
}
