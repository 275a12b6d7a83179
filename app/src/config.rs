//! # API Configuration
//!
//! Endpoint and timeout settings for the auth API, read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `DELIVERY_API_BASE_URL` | `http://127.0.0.1:3001` |
//! | `DELIVERY_LOGIN_PATH` | `/api/auth/login` |
//! | `DELIVERY_SIGNUP_PATH` | `/api/auth/signup` |
//! | `DELIVERY_GOOGLE_LOGIN_PATH` | `/api/auth/google` |
//! | `DELIVERY_HTTP_TIMEOUT_SECS` | `10` |

use std::env;
use std::time::Duration;

use crate::core::error::{AppError, Result};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3001";
pub const DEFAULT_LOGIN_PATH: &str = "/api/auth/login";
pub const DEFAULT_SIGNUP_PATH: &str = "/api/auth/signup";
pub const DEFAULT_GOOGLE_LOGIN_PATH: &str = "/api/auth/google";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const MAX_TIMEOUT_SECS: u64 = 120;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub login_path: String,
    pub sign_up_path: String,
    pub google_login_path: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            sign_up_path: DEFAULT_SIGNUP_PATH.to_string(),
            google_login_path: DEFAULT_GOOGLE_LOGIN_PATH.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Load from the process environment, after reading `.env` if present.
    pub fn from_env() -> Result<Self> {
        // A missing .env file is the normal case outside development.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup and validate the result.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let timeout_secs = match lookup("DELIVERY_HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AppError::Config("DELIVERY_HTTP_TIMEOUT_SECS must be a whole number of seconds".to_string())
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let config = Self {
            base_url: get("DELIVERY_API_BASE_URL", DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            login_path: get("DELIVERY_LOGIN_PATH", DEFAULT_LOGIN_PATH),
            sign_up_path: get("DELIVERY_SIGNUP_PATH", DEFAULT_SIGNUP_PATH),
            google_login_path: get("DELIVERY_GOOGLE_LOGIN_PATH", DEFAULT_GOOGLE_LOGIN_PATH),
            timeout: Duration::from_secs(timeout_secs),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check URL, paths and timeout.
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.base_url).map_err(|e| {
            AppError::Config(format!("DELIVERY_API_BASE_URL is not a valid URL ({}): {}", self.base_url, e))
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(AppError::Config(format!(
                "DELIVERY_API_BASE_URL must use http or https, got {}",
                url.scheme()
            )));
        }

        for (name, path) in [
            ("DELIVERY_LOGIN_PATH", &self.login_path),
            ("DELIVERY_SIGNUP_PATH", &self.sign_up_path),
            ("DELIVERY_GOOGLE_LOGIN_PATH", &self.google_login_path),
        ] {
            if !path.starts_with('/') {
                return Err(AppError::Config(format!("{name} must start with '/', got {path:?}")));
            }
        }

        let secs = self.timeout.as_secs();
        if secs == 0 || secs > MAX_TIMEOUT_SECS {
            return Err(AppError::Config(format!(
                "DELIVERY_HTTP_TIMEOUT_SECS must be between 1 and {MAX_TIMEOUT_SECS}"
            )));
        }

        Ok(())
    }

    /// Absolute URL for an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
