use reqwest::StatusCode;
use thiserror::Error;
use url::ParseError;

#[derive(Debug, Error)]
pub enum FigrError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] ParseError),

    #[error("HTTP {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("Credential file not found at {path}")]
    CredentialFile { path: String },

    #[error("{key} not found in {path}")]
    CredentialKey { key: &'static str, path: String },

    #[error("Figma API error: {0}")]
    Api(String),

    #[error("{0}")]
    EmptyResult(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FigrError {
    pub fn http(status: StatusCode, body: impl Into<String>) -> Self {
        FigrError::Http {
            status,
            body: body.into(),
        }
    }

    /// One-line hint printed after the error message.
    pub fn remediation(&self) -> &'static str {
        match self {
            FigrError::Io(_) => "Check file paths/permissions.",
            FigrError::Transport(_) => "Check connectivity/proxy/VPN and retry.",
            FigrError::InvalidUrl(_) => "Verify the API base URL and asset URLs.",
            FigrError::Http { .. } => {
                "Check the file key, token scopes and rate limits; retry after waiting."
            }
            FigrError::CredentialFile { .. } | FigrError::CredentialKey { .. } => {
                "Add FIGMA_ACCESS_TOKEN=<token> to the env file (see --env-file)."
            }
            FigrError::Api(_) => "Check the requested node IDs and export parameters.",
            FigrError::EmptyResult(_) => {
                "Verify the node IDs exist and are exportable in this file."
            }
            FigrError::Serialization(_) => "The API response did not match the expected shape.",
        }
    }
}

pub type Result<T> = std::result::Result<T, FigrError>;
