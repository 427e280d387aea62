use super::dto::ErrorBody;
use crate::domain::shared::errors::ApiError;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            tracing::warn!(reqwest_timeout = %err);
            ApiError::Timeout
        } else if err.is_connect() {
            tracing::warn!(reqwest_connect = %err);
            ApiError::Transport(format!("Connection failed: {err}"))
        } else if err.is_decode() {
            tracing::warn!(reqwest_decode = %err);
            ApiError::Malformed(err.to_string())
        } else if let Some(status) = err.status() {
            tracing::info!(reqwest_status = %err);
            ApiError::Status {
                status: status.as_u16(),
                message: None,
            }
        } else {
            tracing::error!(reqwest_error = %err);
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::warn!(json_decode = %err);
        ApiError::Malformed(err.to_string())
    }
}

/// Builds a status error from a response body, picking up `{message}` when
/// the body carries one.
pub fn error_from_body(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message);
    ApiError::Status { status, message }
}
