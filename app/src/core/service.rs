//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::{GoogleLoginRequest, LoginRequest, LoginResponse, NetworkError, SignUpRequest, SignUpResponse};

use super::error::Result;
use super::result::ApiResult;

/// Auth endpoints of the delivery API.
///
/// Each call is a single request and a single response. Replies from the
/// server, good or bad, come back as `Ok(ApiResult)`; only transport and
/// decoding failures use the outer `Err`.
///
/// Injected as `Arc<dyn AuthService>` so tests can substitute a stub.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Log in with email and password
    async fn login(&self, request: LoginRequest) -> Result<ApiResult<LoginResponse, NetworkError>>;

    /// Create a new account
    async fn sign_up(&self, request: SignUpRequest) -> Result<ApiResult<SignUpResponse, NetworkError>>;

    /// Exchange a Google id token for an API session
    async fn google_login(
        &self,
        request: GoogleLoginRequest,
    ) -> Result<ApiResult<LoginResponse, NetworkError>>;
}
