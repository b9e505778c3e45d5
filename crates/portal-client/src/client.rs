use portal_types::{AuthResult, Endpoints, LoginRequest, SignupRequest};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info_span, Instrument};

use crate::error::RemoteAuthError;

/// Posts credentials to the remote auth API. Cloning shares the underlying
/// connection pool.
#[derive(Clone, Debug)]
pub struct AuthClient {
    http: Client,
    endpoints: Endpoints,
}

impl AuthClient {
    pub fn new(endpoints: Endpoints, userAgent: &str) -> Result<Self, RemoteAuthError> {
        let http = Client::builder().user_agent(userAgent).build()?;
        Ok(Self { http, endpoints })
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResult, RemoteAuthError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let span = info_span!("auth.login", http.method = "POST", url = %self.endpoints.login_url);

        self.post_json(&self.endpoints.login_url, &body)
            .instrument(span)
            .await
            .inspect_err(|e| error!("error logging in: {}", e.detail()))
    }

    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResult, RemoteAuthError> {
        let body = SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let span = info_span!("auth.signup", http.method = "POST", url = %self.endpoints.signup_url);

        self.post_json(&self.endpoints.signup_url, &body)
            .instrument(span)
            .await
            .inspect_err(|e| error!("error signing up: {}", e.detail()))
    }

    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<AuthResult, RemoteAuthError> {
        let response = self.http.post(url).json(body).send().await?;
        let status = response.status();
        debug!("remote responded {status}");

        if !status.is_success() {
            return Err(RemoteAuthError::Server {
                status: status.as_u16(),
                payload: error_payload(response.text().await),
            });
        }

        Ok(response.json::<AuthResult>().await?)
    }
}

fn error_payload<E: std::fmt::Display>(body: Result<String, E>) -> Option<Value> {
    match body {
        Ok(text) => parse_payload(&text),
        Err(e) => {
            debug!("failed to read error body: {e}");
            None
        }
    }
}

/// Error bodies are kept as JSON when they parse, as text otherwise.
fn parse_payload(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string())))
}
