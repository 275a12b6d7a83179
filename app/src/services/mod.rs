//! # Services Module
//!
//! External service integrations.
//!
//! ```text
//! ┌──────────────────────────┐
//! │  LoginController         │
//! │   Arc<dyn AuthService>   │
//! └────────────┬─────────────┘
//!              │
//! ┌────────────▼─────────────┐        HTTP/JSON       ┌──────────────────────┐
//! │  ApiClient (api/)        │ ─────────────────────▶ │  Delivery API        │
//! │  reqwest + serde_json    │                        │  POST login / signup │
//! └──────────────────────────┘                        │  POST google         │
//!                                                     └──────────────────────┘
//! ```

pub mod api;
