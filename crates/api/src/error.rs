//! API error types with HTTP response mapping.

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// API-level error type that maps to HTTP responses.
///
/// The failure surface of this protocol is a single plain-text diagnostic
/// line, not JSON.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint only answers POST. The protocol treats a wrong method
    /// as a malformed request, hence 400 rather than 405.
    #[error("method must be POST, got {0}")]
    UnsupportedMethod(Method),

    /// The request body could not be read.
    #[error("failed to read request body: {0}")]
    BodyRead(#[source] axum::Error),

    /// The request body was not valid JSON.
    #[error("failed to parse request JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    /// Serializing the reply failed.
    #[error("failed to encode response: {0}")]
    ResponseEncoding(#[source] serde_json::Error),
}

impl ApiError {
    /// The HTTP status this error answers with.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnsupportedMethod(_) | ApiError::MalformedJson(_) => StatusCode::BAD_REQUEST,
            ApiError::BodyRead(_) | ApiError::ResponseEncoding(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "internal server error");
        }
        (status, format!("{self}\n")).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_misuse_maps_to_bad_request() {
        assert_eq!(
            ApiError::UnsupportedMethod(Method::GET).status(),
            StatusCode::BAD_REQUEST
        );
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert_eq!(
            ApiError::MalformedJson(parse_err).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn server_failures_map_to_internal_error() {
        let encode_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            ApiError::ResponseEncoding(encode_err).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn diagnostic_names_the_offending_method() {
        let err = ApiError::UnsupportedMethod(Method::DELETE);
        assert_eq!(err.to_string(), "method must be POST, got DELETE");
    }
}
