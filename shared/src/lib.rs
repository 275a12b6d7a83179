//! # Shared Data Transfer Objects Library
//!
//! The contract between the delivery app client and the backend API.
//! All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login, sign-up, Google exchange and error payloads
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::dto::auth::{LoginRequest, LoginResponse};
//!
//! # async fn run() -> Result<(), reqwest::Error> {
//! let request = LoginRequest {
//!     email: "alice@example.com".to_string(),
//!     password: "secret123".to_string(),
//! };
//!
//! let response: LoginResponse = reqwest::Client::new()
//!     .post("http://localhost:3001/api/auth/login")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod dto;

// Re-export commonly used types for convenience
pub use dto::*;
