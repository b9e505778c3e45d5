use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_LOGIN_URL: &str = "https://api.freeapi.app/users/login";
pub const DEFAULT_SIGNUP_URL: &str = "https://api.freeapi.app/users/signup";

/// Remote endpoints the auth client posts credentials to.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Endpoints {
    pub login_url: String,
    pub signup_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            login_url: DEFAULT_LOGIN_URL.into(),
            signup_url: DEFAULT_SIGNUP_URL.into(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

// Passwords stay out of logs.
impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Success payload from the remote API. Its shape is not interpreted.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct AuthResult(pub serde_json::Value);

impl fmt::Display for AuthResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_request_serializes_email_and_password() {
        let request = LoginRequest {
            email: "a@b.com".into(),
            password: "pw".into(),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, json!({ "email": "a@b.com", "password": "pw" }));
    }

    #[test]
    fn debug_output_hides_password() {
        let request = SignupRequest {
            name: "Ann".into(),
            email: "a@b.com".into(),
            password: "hunter2".into(),
        };
        let rendered = format!("{request:?}");
        assert!(rendered.contains("a@b.com"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn auth_result_is_transparent_json() {
        let result: AuthResult = serde_json::from_str(r#"{"token":"x"}"#).unwrap();
        assert_eq!(result, AuthResult(json!({ "token": "x" })));
        assert_eq!(result.to_string(), r#"{"token":"x"}"#);
    }

    #[test]
    fn default_endpoints_point_at_freeapi() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.login_url, DEFAULT_LOGIN_URL);
        assert_eq!(endpoints.signup_url, DEFAULT_SIGNUP_URL);
    }
}
