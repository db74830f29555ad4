use thiserror::Error;

pub type Result<T> = std::result::Result<T, CheckError>;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Digest challenge was missing or could not be answered
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    #[error("failed to send email: {0}")]
    Mail(String),
}

impl From<digest_auth::Error> for CheckError {
    fn from(err: digest_auth::Error) -> Self {
        CheckError::Auth(err.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for CheckError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        CheckError::Mail(err.to_string())
    }
}

impl From<lettre::error::Error> for CheckError {
    fn from(err: lettre::error::Error) -> Self {
        CheckError::Mail(err.to_string())
    }
}

impl From<lettre::address::AddressError> for CheckError {
    fn from(err: lettre::address::AddressError) -> Self {
        CheckError::InvalidAddress(err.to_string())
    }
}
