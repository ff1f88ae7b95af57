use thiserror::Error;

pub type Result<T> = std::result::Result<T, WistiaError>;

#[derive(Debug, Error)]
pub enum WistiaError {
    /// HTTP 401 from any endpoint, normalized by the response middleware.
    #[error("{message}")]
    Authentication { message: String, status: u16 },

    #[error("{0}")]
    Validation(String),

    /// Non-2xx (other than 401) surfaced with whatever detail the body gave us.
    #[error("{0}")]
    Remote(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WistiaError {
    pub fn authentication(message: impl Into<String>, status: u16) -> Self {
        WistiaError::Authentication {
            message: message.into(),
            status,
        }
    }
}
