use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteAuthError {
    /// The request never produced a usable response: DNS, connect, TLS,
    /// or an unreadable success body.
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote API answered with a non-success status.
    #[error("request failed with status code {status}")]
    Server { status: u16, payload: Option<Value> },
}

impl RemoteAuthError {
    /// What gets logged: the server's payload when it sent one, otherwise
    /// the transport message.
    pub fn detail(&self) -> String {
        match self {
            RemoteAuthError::Server {
                payload: Some(payload),
                ..
            } => payload.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for RemoteAuthError {
    fn from(e: reqwest::Error) -> Self {
        RemoteAuthError::Transport(e.to_string())
    }
}
