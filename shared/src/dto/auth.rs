use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Sign-up request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Identity returned by the Google sign-in SDK.
///
/// Every field is optional because the SDK only fills what the user granted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoogleUser {
    pub email: Option<String>,
    pub name: Option<String>,
    pub id: Option<String>,
    pub token: Option<String>,
}

/// Exchange of a Google identity for an API session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoogleLoginRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub token: String,
}

impl GoogleLoginRequest {
    /// Build the exchange request from an SDK identity.
    ///
    /// Returns `None` when the SDK did not hand back an id token, since the
    /// backend has nothing to verify in that case.
    pub fn from_google_user(user: GoogleUser) -> Option<Self> {
        let token = user.token.filter(|t| !t.is_empty())?;
        Some(Self {
            email: user.email,
            name: user.name,
            id: user.id,
            token,
        })
    }
}

/// Login success payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub user: UserInfo,
    pub token: String,
    #[serde(default)]
    pub message: String,
}

/// Sign-up success payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignUpResponse {
    pub user: UserInfo,
    pub token: String,
    #[serde(default)]
    pub message: String,
}

/// User information (public, safe to send to client)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Error payload returned by the API on a failed request.
///
/// The backend writes the text under `message`; older endpoints use `error`,
/// so both keys are accepted. `status` is filled in by the client from the
/// HTTP status line and is absent from most bodies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkError {
    #[serde(alias = "error")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl NetworkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    /// Attach the HTTP status the error arrived with.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

impl std::fmt::Display for NetworkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} (HTTP {})", self.message, status),
            None => f.write_str(&self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_wire_format() {
        let req = LoginRequest {
            email: "a@b.com".to_string(),
            password: "secret123".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "email": "a@b.com", "password": "secret123" })
        );
    }

    #[test]
    fn test_network_error_accepts_error_key() {
        let err: NetworkError = serde_json::from_str(r#"{"error":"Invalid credentials"}"#).unwrap();
        assert_eq!(err.message, "Invalid credentials");
        assert_eq!(err.status, None);

        let err: NetworkError =
            serde_json::from_str(r#"{"message":"User exists","status":409}"#).unwrap();
        assert_eq!(err.message, "User exists");
        assert_eq!(err.status, Some(409));
    }

    #[test]
    fn test_network_error_display() {
        assert_eq!(NetworkError::new("Nope").to_string(), "Nope");
        assert_eq!(
            NetworkError::new("Nope").with_status(401).to_string(),
            "Nope (HTTP 401)"
        );
    }

    #[test]
    fn test_login_response_message_defaults_to_empty() {
        let body = r#"{"user":{"id":"7","name":"Ann","email":"ann@x.io"},"token":"jwt"}"#;
        let resp: LoginResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.user.id, "7");
        assert_eq!(resp.token, "jwt");
        assert!(resp.message.is_empty());
    }

    #[test]
    fn test_google_request_requires_token() {
        let user = GoogleUser {
            email: Some("g@gmail.com".to_string()),
            name: Some("G".to_string()),
            id: Some("123".to_string()),
            token: None,
        };
        assert!(GoogleLoginRequest::from_google_user(user.clone()).is_none());

        let with_empty = GoogleUser {
            token: Some(String::new()),
            ..user.clone()
        };
        assert!(GoogleLoginRequest::from_google_user(with_empty).is_none());

        let with_token = GoogleUser {
            token: Some("id-token".to_string()),
            ..user
        };
        let req = GoogleLoginRequest::from_google_user(with_token).unwrap();
        assert_eq!(req.token, "id-token");
        assert_eq!(req.id.as_deref(), Some("123"));
    }

    #[test]
    fn test_google_request_omits_missing_fields() {
        let req = GoogleLoginRequest {
            email: None,
            name: None,
            id: None,
            token: "t".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({ "token": "t" }));
    }
}
