//! # Common Error Types
//!
//! Consolidated error handling for the delivery app client.
//!
//! [`AppError`] covers everything that is *not* an answer from the API.
//! A well-formed error reply from the server (bad credentials, duplicate
//! account, 5xx with or without a body) is never an `AppError`: it arrives as
//! [`ApiResult::Failure`](crate::core::ApiResult::Failure) carrying a
//! [`shared::NetworkError`].
//!
//! ## Error Categories
//!
//! - **Transport**: The request never produced a response (connection refused,
//!   DNS, timeout, body read aborted). Expected in the field and shown to the
//!   user as a toast.
//! - **Decode**: A 2xx response whose body does not match the contract. This is
//!   a programming or deployment error and propagates to the caller.
//! - **Config**: Invalid environment configuration.
//! - **State**: Task scope failures (a submission task panicked).
//! - **Io**: Console read/write failures.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use delivery_app::core::error::AppError;
//!
//! fn require_https(url: &str) -> Result<(), AppError> {
//!     if !url.starts_with("https://") {
//!         return Err(AppError::Config(format!("{url} is not https")));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Application-wide error type for failures that are not API replies.
#[derive(Debug, Error)]
pub enum AppError {
    /// No response was obtained from the server.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response did not match the expected payload.
    #[error("Failed to parse {endpoint} response: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Task scope failure.
    #[error("State error: {0}")]
    State(String),

    /// Console I/O failure in the driver binary.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Whether the failure is a connectivity problem the user can act on.
    ///
    /// Only transport errors qualify; everything else is a defect in the client,
    /// the server contract or the configuration.
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Transport(_))
    }
}

/// Convenience type alias for `Result<T, AppError>`.
///
/// ```rust
/// use delivery_app::core::error::Result;
///
/// fn operation() -> Result<String> {
///     Ok("success".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::Config("DELIVERY_HTTP_TIMEOUT_SECS must be a number".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: DELIVERY_HTTP_TIMEOUT_SECS must be a number"
        );
        assert!(!err.is_transport());

        let err = AppError::from(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed"));
        assert_eq!(err.to_string(), "I/O error: stdin closed");
    }

    #[test]
    fn test_decode_error_names_endpoint() {
        let source = serde_json::from_str::<shared::LoginResponse>("{}").unwrap_err();
        let err = AppError::Decode {
            endpoint: "/api/auth/login".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("Failed to parse /api/auth/login response"));
        assert!(!err.is_transport());
    }
}
