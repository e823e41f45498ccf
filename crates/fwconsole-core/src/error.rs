//! Console Errors
//!
//! Failures of a REST call and of local form validation. The `Display`
//! output is what ends up in the toast.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// A failed REST call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Transport(String),
    /// Naming collision reported with HTTP 409
    #[error("{0}")]
    Conflict(String),
    /// Any other non-2xx status
    #[error("{message}")]
    Status { status: u16, message: String },
    /// 2xx response carrying `success: false`
    #[error("{0}")]
    Rejected(String),
    /// 2xx response whose payload could not be decoded
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Conflict(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Input rejected before any request is made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please enter a name")]
    EmptyName,
    #[error("please select a locality")]
    NoScope,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_server_message() {
        let err = ApiError::Status { status: 500, message: "database down".into() };
        assert_eq!(err.to_string(), "database down");
        assert_eq!(ApiError::Conflict("name taken".into()).to_string(), "name taken");
        assert!(ApiError::Conflict(String::new()).is_conflict());
        assert!(!ApiError::Rejected(String::new()).is_conflict());
    }
}
