//! # Login Screen
//!
//! Headless model of the login screen: the form, the controller it feeds
//! and the navigation callbacks it fires. A renderer reads from it and calls
//! the `click_*` / `on_*` methods.

use std::sync::Arc;

use shared::{GoogleUser, LoginResponse};
use thiserror::Error;

use super::controller::LoginController;
use super::events::{Dispatch, LoginChannel, LoginEvents, LoginUiEvent};
use super::form::LoginForm;
use super::state::LoginUiState;
use crate::core::error::Result;
use crate::core::service::AuthService;

/// Hooks the host application provides for navigation and toasts.
pub trait ScreenCallbacks: Send {
    fn on_login_success(&mut self, response: LoginResponse);

    fn show_toast(&mut self, message: String);

    fn on_forget_password_click(&mut self) {}

    fn on_facebook_click(&mut self) {}

    fn on_create_account_click(&mut self) {}
}

/// Failure reported by the Google sign-in SDK.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GoogleSignInError {
    #[error("Google sign-in cancelled by user")]
    Cancelled,
    #[error("Google sign-in failed with status {0}")]
    Api(i32),
}

pub struct LoginScreen<C: ScreenCallbacks> {
    pub form: LoginForm,
    controller: LoginController,
    events: LoginEvents,
    callbacks: C,
    google_error: bool,
}

impl<C: ScreenCallbacks> LoginScreen<C> {
    pub fn new(api: Arc<dyn AuthService>, callbacks: C) -> Self {
        let (controller, events) = LoginController::new(api);
        Self {
            form: LoginForm::new(),
            controller,
            events,
            callbacks,
            google_error: false,
        }
    }

    pub fn ui_state(&self) -> LoginUiState {
        self.controller.ui_state()
    }

    /// Whether the progress indicator is drawn.
    pub fn is_loading_visible(&self) -> bool {
        self.controller.ui_state().is_data_loading
    }

    pub fn is_login_enabled(&self) -> bool {
        self.form.can_submit()
    }

    /// Set when the Google SDK returned without an account.
    pub fn has_google_error(&self) -> bool {
        self.google_error
    }

    pub fn callbacks(&self) -> &C {
        &self.callbacks
    }

    /// Login button. Does nothing while the button is disabled.
    pub fn click_login(&mut self) -> Option<Dispatch> {
        let event = self.form.submit()?;
        Some(self.controller.on_event(event))
    }

    pub fn click_forgot_password(&mut self) {
        self.callbacks.on_forget_password_click();
    }

    pub fn click_facebook(&mut self) {
        self.callbacks.on_facebook_click();
    }

    pub fn click_create_account(&mut self) {
        self.callbacks.on_create_account_click();
    }

    /// Result of the Google sign-in activity.
    pub fn on_google_result(
        &mut self,
        result: std::result::Result<Option<GoogleUser>, GoogleSignInError>,
    ) -> Option<Dispatch> {
        match result {
            Ok(Some(user)) => {
                tracing::info!(google_id = ?user.id, "Google sign-in returned an account");
                self.google_error = false;
                Some(self.controller.on_event(LoginUiEvent::OnGoogleClick(user)))
            }
            Ok(None) => {
                tracing::warn!("Google sign-in returned no account");
                self.google_error = true;
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Google sign-in failed");
                None
            }
        }
    }

    /// Deliver every pending notification without waiting.
    pub fn pump_events(&mut self) -> usize {
        let mut delivered = 0;
        while let Some(event) = self.events.try_recv() {
            self.deliver(event);
            delivered += 1;
        }
        delivered
    }

    /// Wait for one notification and deliver it. `false` once the controller
    /// has been closed and nothing is left.
    pub async fn next_event(&mut self) -> bool {
        match self.events.recv().await {
            Some(event) => {
                self.deliver(event);
                true
            }
            None => false,
        }
    }

    /// Wait for the in-flight request to finish and deliver what it produced.
    pub async fn settle(&mut self) -> Result<()> {
        let result = self.controller.join().await;
        self.pump_events();
        result
    }

    /// Tear the screen down. Pending work is cancelled and nothing more is
    /// delivered.
    pub fn close(&mut self) {
        self.controller.close();
        while self.events.try_recv().is_some() {}
    }

    fn deliver(&mut self, event: LoginChannel) {
        match event {
            LoginChannel::ShowToast(text) => self.callbacks.show_toast(text.as_string()),
            LoginChannel::OnLoginSuccess(response) => self.callbacks.on_login_success(response),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::core::result::ApiResult;
    use async_trait::async_trait;
    use shared::{GoogleLoginRequest, LoginRequest, NetworkError, SignUpRequest, SignUpResponse, UserInfo};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    #[derive(Default)]
    struct Recorder {
        successes: Vec<LoginResponse>,
        toasts: Vec<String>,
        forgot: usize,
        facebook: usize,
        create: usize,
    }

    impl ScreenCallbacks for Recorder {
        fn on_login_success(&mut self, response: LoginResponse) {
            self.successes.push(response);
        }

        fn show_toast(&mut self, message: String) {
            self.toasts.push(message);
        }

        fn on_forget_password_click(&mut self) {
            self.forgot += 1;
        }

        fn on_facebook_click(&mut self) {
            self.facebook += 1;
        }

        fn on_create_account_click(&mut self) {
            self.create += 1;
        }
    }

    struct StubAuth {
        accept: bool,
        gate: Option<Arc<Notify>>,
        calls: AtomicUsize,
    }

    impl StubAuth {
        fn accepting() -> Self {
            Self {
                accept: true,
                gate: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn rejecting() -> Self {
            Self {
                accept: false,
                ..Self::accepting()
            }
        }

        async fn reply(&self) -> Result<ApiResult<LoginResponse, NetworkError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if self.accept {
                Ok(ApiResult::Success(LoginResponse {
                    user: UserInfo {
                        id: "9".to_string(),
                        name: "Ann".to_string(),
                        email: "a@b.com".to_string(),
                    },
                    token: "jwt".to_string(),
                    message: "Login successful".to_string(),
                }))
            } else {
                Ok(ApiResult::Failure(NetworkError::new("Invalid email or password")))
            }
        }
    }

    #[async_trait]
    impl AuthService for StubAuth {
        async fn login(&self, _request: LoginRequest) -> Result<ApiResult<LoginResponse, NetworkError>> {
            self.reply().await
        }

        async fn sign_up(&self, _request: SignUpRequest) -> Result<ApiResult<SignUpResponse, NetworkError>> {
            Err(AppError::State("not used".to_string()))
        }

        async fn google_login(
            &self,
            _request: GoogleLoginRequest,
        ) -> Result<ApiResult<LoginResponse, NetworkError>> {
            self.reply().await
        }
    }

    fn screen(api: Arc<StubAuth>) -> LoginScreen<Recorder> {
        LoginScreen::new(api, Recorder::default())
    }

    #[tokio::test]
    async fn test_valid_credentials_navigate_on_success() {
        let api = Arc::new(StubAuth::accepting());
        let mut screen = screen(api.clone());
        screen.form.set_email("a@b.com");
        screen.form.set_password("secret123");

        assert!(screen.is_login_enabled());
        assert_eq!(screen.click_login(), Some(Dispatch::Started));
        assert!(screen.is_loading_visible());

        screen.settle().await.unwrap();

        assert!(!screen.is_loading_visible());
        assert_eq!(screen.callbacks().successes.len(), 1);
        assert_eq!(screen.callbacks().successes[0].token, "jwt");
        assert!(screen.callbacks().toasts.is_empty());
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalid_credentials_never_reach_controller() {
        let api = Arc::new(StubAuth::accepting());
        let mut screen = screen(api.clone());
        screen.form.set_email("bad-email");
        screen.form.set_password("x");

        assert!(!screen.is_login_enabled());
        assert_eq!(screen.click_login(), None);
        screen.settle().await.unwrap();

        assert!(!screen.is_loading_visible());
        assert_eq!(screen.ui_state().last_outcome, None);
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
        assert!(screen.callbacks().successes.is_empty());
        assert!(screen.callbacks().toasts.is_empty());
    }

    #[tokio::test]
    async fn test_rejected_login_shows_toast() {
        let api = Arc::new(StubAuth::rejecting());
        let mut screen = screen(api);
        screen.form.set_email("a@b.com");
        screen.form.set_password("wrong-pass");

        screen.click_login();
        screen.settle().await.unwrap();

        assert_eq!(screen.callbacks().toasts, vec!["Invalid email or password".to_string()]);
        assert!(screen.callbacks().successes.is_empty());
    }

    #[tokio::test]
    async fn test_next_event_delivers_one_notification() {
        let api = Arc::new(StubAuth::rejecting());
        let mut screen = screen(api);
        screen.form.set_email("a@b.com");
        screen.form.set_password("wrong-pass");

        screen.click_login();
        assert!(screen.next_event().await);
        assert_eq!(screen.callbacks().toasts.len(), 1);
        assert_eq!(screen.pump_events(), 0);
    }

    #[tokio::test]
    async fn test_google_result_handling() {
        let api = Arc::new(StubAuth::accepting());
        let mut screen = screen(api.clone());

        assert_eq!(screen.on_google_result(Ok(None)), None);
        assert!(screen.has_google_error());

        assert_eq!(screen.on_google_result(Err(GoogleSignInError::Cancelled)), None);
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);

        let user = GoogleUser {
            email: Some("g@gmail.com".to_string()),
            name: Some("G".to_string()),
            id: Some("42".to_string()),
            token: Some("id-token".to_string()),
        };
        assert_eq!(screen.on_google_result(Ok(Some(user))), Some(Dispatch::Started));
        assert!(!screen.has_google_error());
        screen.settle().await.unwrap();

        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
        assert_eq!(screen.callbacks().successes.len(), 1);
    }

    #[tokio::test]
    async fn test_navigation_callbacks() {
        let mut screen = screen(Arc::new(StubAuth::accepting()));
        screen.click_forgot_password();
        screen.click_facebook();
        screen.click_create_account();
        screen.click_create_account();

        assert_eq!(screen.callbacks().forgot, 1);
        assert_eq!(screen.callbacks().facebook, 1);
        assert_eq!(screen.callbacks().create, 2);
    }

    #[tokio::test]
    async fn test_close_drops_pending_result() {
        let gate = Arc::new(Notify::new());
        let api = Arc::new(StubAuth {
            gate: Some(gate.clone()),
            ..StubAuth::accepting()
        });
        let mut screen = screen(api);
        screen.form.set_email("a@b.com");
        screen.form.set_password("secret123");

        screen.click_login();
        screen.close();
        gate.notify_one();
        screen.settle().await.unwrap();

        assert!(!screen.is_loading_visible());
        assert!(screen.callbacks().successes.is_empty());
        assert!(!screen.next_event().await);
        assert_eq!(screen.click_login(), Some(Dispatch::Refused));
    }
}
