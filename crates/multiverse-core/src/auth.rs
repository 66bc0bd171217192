//! Login form state and credential checking.
//!
//! Credentials are checked through [`CredentialVerifier`] so the demo pair in
//! [`DemoCredentials`] can be replaced by a real backend without touching the
//! form. The demo pair is not authentication in any meaningful sense.

use crate::session::{SessionStore, SESSION_MARKER};

/// Message shown when the credential pair is rejected.
pub const INVALID_CREDENTIALS: &str = "Usuario o contraseña incorrectos";

/// Checks a username/password pair.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Fixed credential pair compared byte for byte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoCredentials {
    username: String,
    password: String,
}

impl DemoCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for DemoCredentials {
    fn default() -> Self {
        Self::new("Test123", "password@2")
    }
}

impl CredentialVerifier for DemoCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username.as_bytes() == self.username.as_bytes()
            && password.as_bytes() == self.password.as_bytes()
    }
}

/// Result of submitting the login form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Flag written; caller navigates to the card grid.
    Authenticated,
    /// Credentials rejected; the form shows [`INVALID_CREDENTIALS`].
    Rejected,
}

/// State behind the login page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    password_visible: bool,
    error: Option<String>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    /// Flip between masked and plain rendering of the password.
    pub fn toggle_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    /// HTML input type for the password field.
    pub fn input_type(&self) -> &'static str {
        if self.password_visible {
            "text"
        } else {
            "password"
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Check the fields and, on success, write the session flag.
    ///
    /// A failed flag write is logged only; the session guard sends the user
    /// back to the login page on the next navigation.
    pub fn submit(
        &mut self,
        verifier: &dyn CredentialVerifier,
        store: &dyn SessionStore,
    ) -> LoginOutcome {
        if !verifier.verify(&self.username, &self.password) {
            self.error = Some(INVALID_CREDENTIALS.to_string());
            return LoginOutcome::Rejected;
        }

        if let Err(e) = store.write(SESSION_MARKER) {
            tracing::error!(error = %e, "Failed to persist session flag");
        }
        self.error = None;
        tracing::info!("Login accepted");
        LoginOutcome::Authenticated
    }
}

/// Clear the session flag.
pub fn logout(store: &dyn SessionStore) {
    match store.clear() {
        Ok(()) => tracing::info!("Logged out"),
        Err(e) => tracing::error!(error = %e, "Failed to clear session flag"),
    }
}
