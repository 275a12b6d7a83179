//! # Login Screen Orchestration
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  LoginScreen                                             │
//! │   form: LoginForm ──(valid?)──▶ click_login()            │
//! │                                     │ LoginUiEvent       │
//! │   ┌─────────────────────────────────▼──────────────────┐ │
//! │   │ LoginController                                    │ │
//! │   │  state: Arc<RwLock<LoginUiState>>                  │ │
//! │   │  scope: CancellationToken ── tokio::spawn ──▶ API  │ │
//! │   └──────────────┬─────────────────────────────────────┘ │
//! │                  │ async_channel (one receiver)          │
//! │   LoginEvents ◀──┘                                       │
//! │     ShowToast ──▶ callbacks.show_toast                   │
//! │     OnLoginSuccess ──▶ callbacks.on_login_success        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Related Modules
//!
//! - [`state`]: `LoginUiState` and the `Idle`/`Loading` phase
//! - [`events`]: inbound `LoginUiEvent`, outbound `LoginChannel`
//! - [`controller`]: request lifecycle
//! - [`form`]: field values and button enablement
//! - [`screen`]: ties the above to host callbacks

pub mod controller;
pub mod events;
pub mod form;
pub mod screen;
pub mod state;

pub use controller::LoginController;
pub use events::{Dispatch, LoginChannel, LoginEvents, LoginUiEvent, TextKey, UiText};
pub use form::LoginForm;
pub use screen::{GoogleSignInError, LoginScreen, ScreenCallbacks};
pub use state::{LoginPhase, LoginUiState, Outcome};
