//! # Delivery App - Login Flow
//!
//! Client side of login and sign-up against the delivery API: input
//! validation, a typed HTTP client, and the controller that turns a button
//! press into a request, a state change and a one-shot notification.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              delivery-app (this crate)                 │
//! ├────────────────────────────────────────────────────────┤
//! │  app        - LoginScreen, LoginForm, LoginController  │
//! │  services   - ApiClient (reqwest)                      │
//! │  core       - AppError, ApiResult, AuthService         │
//! │  utils      - email / password validation              │
//! │  config     - ApiConfig from environment               │
//! │  debug      - tracing subscriber setup                 │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP/JSON (shared DTOs)
//!          ▼
//! ┌─────────────────┐
//! │  Delivery API   │
//! └─────────────────┘
//! ```
//!
//! ## Flow
//!
//! 1. The form enables the login button only when both fields validate.
//! 2. The button sends `LoginUiEvent::Submit` to the controller.
//! 3. The controller marks itself loading and spawns the API call.
//! 4. The reply becomes `OnLoginSuccess` or `ShowToast`; loading is cleared
//!    on every path.
//! 5. The screen drains the notification and fires its callback.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use delivery_app::app::{LoginScreen, ScreenCallbacks};
//! use delivery_app::config::ApiConfig;
//! use delivery_app::services::api::ApiClient;
//!
//! struct Host;
//!
//! impl ScreenCallbacks for Host {
//!     fn on_login_success(&mut self, response: shared::LoginResponse) {
//!         println!("welcome {}", response.user.name);
//!     }
//!     fn show_toast(&mut self, message: String) {
//!         println!("{message}");
//!     }
//! }
//!
//! # async fn run() -> delivery_app::Result<()> {
//! let api = Arc::new(ApiClient::new(ApiConfig::from_env()?)?);
//! let mut screen = LoginScreen::new(api, Host);
//! screen.form.set_email("a@b.com");
//! screen.form.set_password("secret123");
//! screen.click_login();
//! screen.settle().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p delivery-app
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::app::{LoginController, LoginScreen, LoginUiEvent, LoginUiState};
pub use crate::core::{ApiResult, AppError, AuthService, Result};
