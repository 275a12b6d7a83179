//! # Login Form
//!
//! Field values owned by the screen. The controller never sees them until
//! the login button is pressed with both fields valid.

use super::events::LoginUiEvent;
use crate::utils::validation::{
    is_valid_email, is_valid_password, validate_email, validate_password, EMAIL_ERROR_MIN_LEN,
    PASSWORD_ERROR_MIN_LEN,
};

const MASK_CHAR: char = '•';

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    email: String,
    password: String,
    password_visible: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn is_password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    /// Password as it should be drawn.
    pub fn display_password(&self) -> String {
        if self.password_visible {
            self.password.clone()
        } else {
            self.password.chars().map(|_| MASK_CHAR).collect()
        }
    }

    /// Inline email error, shown once the user has typed enough to judge.
    pub fn email_error(&self) -> Option<String> {
        if self.email.chars().count() < EMAIL_ERROR_MIN_LEN {
            return None;
        }
        validate_email(&self.email).error
    }

    /// Inline password error, shown once the user has typed enough to judge.
    pub fn password_error(&self) -> Option<String> {
        if self.password.chars().count() < PASSWORD_ERROR_MIN_LEN {
            return None;
        }
        validate_password(&self.password).error
    }

    /// Whether the login button is enabled.
    pub fn can_submit(&self) -> bool {
        is_valid_email(&self.email) && is_valid_password(&self.password)
    }

    /// The submit event for the current values, if the button is enabled.
    pub fn submit(&self) -> Option<LoginUiEvent> {
        if !self.can_submit() {
            return None;
        }
        Some(LoginUiEvent::Submit {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}
