//! # Core Abstractions
//!
//! Error types, the tagged API result and the service trait used for
//! dependency injection.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`result`]**: `ApiResult<T, E>`, the success/failure reply of the API
//! - **[`service`]**: `AuthService`, implemented by the HTTP client and by test stubs
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use delivery_app::config::ApiConfig;
//! use delivery_app::core::AuthService;
//! use delivery_app::services::api::ApiClient;
//!
//! # fn build() -> delivery_app::core::Result<()> {
//! let api: Arc<dyn AuthService> = Arc::new(ApiClient::new(ApiConfig::default())?);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod result;
pub mod service;

pub use error::{AppError, Result};
pub use result::ApiResult;
pub use service::AuthService;
