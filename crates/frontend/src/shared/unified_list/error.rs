use thiserror::Error;

/// Ошибки виджета списка. Любая ошибка завершает действие пользователя.
#[derive(Debug, Error)]
pub enum ListError {
    /// HTTP 401, the session is gone
    #[error("Session expired")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    /// Non-2xx reply. `detail` is whatever the server declared in the body.
    #[error("Server error: {code}")]
    Status { code: u16, detail: Option<String> },

    #[error("Failed to send request: {0}")]
    Transport(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Serialize(String),

    #[error("No rows selected")]
    NothingSelected,

    #[error("Browser API error: {0}")]
    Dom(String),

    #[error("Invalid list configuration: {0}")]
    Config(String),
}

impl ListError {
    /// Server-declared text carried by a non-2xx reply
    pub fn detail(&self) -> Option<&str> {
        match self {
            ListError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ListError {
    fn from(e: serde_json::Error) -> Self {
        ListError::Decode(e.to_string())
    }
}
