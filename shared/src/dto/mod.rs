//! # Data Transfer Objects (DTOs)
//!
//! Request and response bodies exchanged with the delivery API.
//!
//! ## Serialization Format
//!
//! All DTOs are JSON bodies (serde derives):
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! {
//!   "email": "alice@example.com",
//!   "password": "secret123"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "user": { "id": "1", "name": "Alice", "email": "alice@example.com" },
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "message": "Login successful"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 401 Unauthorized
//! Content-Type: application/json
//!
//! { "message": "Invalid email or password" }
//! ```

pub mod auth;

pub use auth::*;
