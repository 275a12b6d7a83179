//! # Delivery API Client Module
//!
//! HTTP client for the delivery backend's auth endpoints.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct and reply mapping
//! └── auth.rs     - Authentication endpoints (login, sign-up, google)
//! ```

pub mod auth;
pub mod client;

pub use auth::*;
pub use client::ApiClient;
