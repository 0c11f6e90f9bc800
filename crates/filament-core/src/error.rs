//! Error Types
//!
//! Every failure the client can meet while talking to the API.
//!
//! ```text
//! no response          -> Network
//! login rejected       -> InvalidPassword
//! 401 / 403            -> SessionExpired   (forces logout)
//! non-2xx on create    -> Rejected         (server message if any)
//! non-2xx on read      -> Status
//! unexpected body      -> Decode
//! empty required field -> MissingField
//! unparseable number   -> InvalidNumber
//! ```

use thiserror::Error;

/// Common result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// `POST /api/login` answered with a non-2xx status.
    #[error("Invalid password")]
    InvalidPassword,

    /// An authenticated call answered 401 or 403.
    #[error("Session expired (status {0})")]
    SessionExpired(u16),

    /// A create call was refused by the server.
    #[error("Request rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// A read call answered with a non-2xx status.
    #[error("Unexpected status {0}")]
    Status(u16),

    /// The response body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// A required form field was left empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A numeric form field did not parse.
    #[error("Invalid number in field: {0}")]
    InvalidNumber(&'static str),
}

impl ApiError {
    /// Whether this error invalidates the session
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired(_))
    }

    /// Text shown to the user for this error.
    ///
    /// Server-provided messages win over the generic wording.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Could not connect to the server.".to_string(),
            ApiError::InvalidPassword => "Invalid password!".to_string(),
            ApiError::SessionExpired(_) => "Your session has expired. Please log in again.".to_string(),
            ApiError::Rejected { message: Some(msg), .. } if !msg.trim().is_empty() => msg.clone(),
            ApiError::Rejected { .. } => "The record could not be saved.".to_string(),
            ApiError::Status(_) => "Something went wrong while loading data.".to_string(),
            ApiError::Decode(_) => "The server sent an unexpected response.".to_string(),
            ApiError::MissingField(field) => format!("Please fill in the {} field.", field),
            ApiError::InvalidNumber(field) => format!("The {} field must be a positive number.", field),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
