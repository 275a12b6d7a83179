//! # Authentication Endpoints
//!
//! Login, sign-up and the Google session exchange.

use async_trait::async_trait;
use shared::{GoogleLoginRequest, LoginRequest, LoginResponse, NetworkError, SignUpRequest, SignUpResponse};

use super::client::ApiClient;
use crate::core::error::Result;
use crate::core::result::ApiResult;
use crate::core::service::AuthService;

/// Log in with email and password.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn login(client: &ApiClient, request: LoginRequest) -> Result<ApiResult<LoginResponse, NetworkError>> {
    tracing::info!("Attempting login");
    let result = client.post_json(&client.config.login_path, &request).await?;
    if result.is_success() {
        tracing::info!("Login successful");
    }
    Ok(result)
}

/// Create a new account.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn sign_up(client: &ApiClient, request: SignUpRequest) -> Result<ApiResult<SignUpResponse, NetworkError>> {
    tracing::info!("Attempting sign-up");
    client.post_json(&client.config.sign_up_path, &request).await
}

/// Exchange a Google id token for an API session.
#[tracing::instrument(skip(client, request), fields(google_id = ?request.id))]
pub async fn google_login(
    client: &ApiClient,
    request: GoogleLoginRequest,
) -> Result<ApiResult<LoginResponse, NetworkError>> {
    tracing::info!("Attempting Google login");
    client.post_json(&client.config.google_login_path, &request).await
}

#[async_trait]
impl AuthService for ApiClient {
    async fn login(&self, request: LoginRequest) -> Result<ApiResult<LoginResponse, NetworkError>> {
        login(self, request).await
    }

    async fn sign_up(&self, request: SignUpRequest) -> Result<ApiResult<SignUpResponse, NetworkError>> {
        sign_up(self, request).await
    }

    async fn google_login(
        &self,
        request: GoogleLoginRequest,
    ) -> Result<ApiResult<LoginResponse, NetworkError>> {
        google_login(self, request).await
    }
}
