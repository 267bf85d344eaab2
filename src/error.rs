//! Error Types
//!
//! One error enum for everything that can go wrong between a user action
//! and the backend's answer.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never reached the server or no response came back
    #[error("network error: {0}")]
    Network(String),
    /// The response body was not the structured data we expected
    #[error("protocol error: {0}")]
    Protocol(String),
    /// The payload was rejected, by the server or by a client-side check
    #[error("{0}")]
    Validation(String),
    /// The user declined a confirmation prompt
    #[error("aborted by user")]
    UserAbort,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn is_abort(&self) -> bool {
        matches!(self, ApiError::UserAbort)
    }

    /// Text shown to the user in a notification.
    /// Validation messages come from the server and are shown verbatim.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Protocol(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Protocol(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = ApiError::validation("Es muss mindestens eine Gruppe existieren!");
        assert_eq!(err.user_message(), "Es muss mindestens eine Gruppe existieren!");
    }

    #[test]
    fn test_json_error_is_protocol() {
        let err: ApiError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, ApiError::Protocol(_)));
    }

    #[test]
    fn test_abort_is_not_a_failure_message() {
        assert!(ApiError::UserAbort.is_abort());
        assert!(!ApiError::Network("down".into()).is_abort());
    }
}
