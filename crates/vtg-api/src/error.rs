//! API error types and conversions

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use vtg_core::AdapterError;

/// API error type that converts to HTTP responses
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request (malformed request body)
    BadRequest(String),
    /// 400 Bad Request (empty id or endpoint)
    InvalidArgument(String),
    /// 400 Bad Request (unknown engine action)
    InvalidCommand(String),
    /// 404 Not Found (unknown vehicle)
    NotFound(String),
    /// 404 Not Found (no adapter for the vehicle's brand)
    UnsupportedBrand(String),
    /// 500 Internal Server Error (upstream failure)
    Upstream(String),
    /// 500 Internal Server Error (malformed upstream payload)
    Translation(String),
    /// 500 Internal Server Error
    Internal(String),
}

/// Standard error response format
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl ApiError {
    fn parts(self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, "invalid_argument", msg),
            ApiError::InvalidCommand(msg) => (StatusCode::BAD_REQUEST, "invalid_command", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::UnsupportedBrand(msg) => (StatusCode::NOT_FOUND, "unsupported_brand", msg),
            ApiError::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "upstream_error", msg),
            ApiError::Translation(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "translation_error", msg)
            }
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = self.parts();

        // Log errors at appropriate levels
        if status.is_server_error() {
            tracing::error!(error = error_type, %message, "API error");
        } else if status.is_client_error() {
            tracing::debug!(error = error_type, %message, "API client error");
        }

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<AdapterError> for ApiError {
    fn from(err: AdapterError) -> Self {
        match err {
            AdapterError::NotFound(msg) => ApiError::NotFound(msg),
            AdapterError::UnsupportedBrand(msg) => ApiError::UnsupportedBrand(msg),
            AdapterError::InvalidArgument(msg) => ApiError::InvalidArgument(msg),
            AdapterError::InvalidCommand(msg) => ApiError::InvalidCommand(msg),
            err @ AdapterError::Upstream { .. } => ApiError::Upstream(err.to_string()),
            // Detail was logged by the translation guard
            AdapterError::Translation(_) => ApiError::Translation(
                "upstream response could not be translated".to_string(),
            ),
            AdapterError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use vtg_core::TranslationError;

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn not_found_response() {
        let err = ApiError::from(AdapterError::NotFound(
            "unable to find brand for vehicle_id 42".into(),
        ));
        let (status, json) = body_json(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "not_found");
        assert!(json["message"].as_str().unwrap().contains("42"));
    }

    #[tokio::test]
    async fn unsupported_brand_is_not_found() {
        let err = ApiError::from(AdapterError::UnsupportedBrand("brand ford not found".into()));
        let (status, json) = body_json(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "unsupported_brand");
    }

    #[tokio::test]
    async fn translation_detail_is_not_exposed() {
        let err = ApiError::from(AdapterError::from(TranslationError::mismatch(
            "doors.values",
            "array",
            &serde_json::json!("notalist"),
        )));
        let (status, json) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "translation_error");
        assert!(!json["message"].as_str().unwrap().contains("doors"));
    }

    #[tokio::test]
    async fn upstream_error_carries_reason() {
        let err = ApiError::from(AdapterError::upstream(
            Some("404".into()),
            "Vehicle id: 9 not found.",
        ));
        let (status, json) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "upstream_error");
        assert!(json["message"].as_str().unwrap().contains("Vehicle id: 9"));
    }

    #[tokio::test]
    async fn invalid_command_is_bad_request() {
        let err = ApiError::from(AdapterError::InvalidCommand("FOO".into()));
        let (status, json) = body_json(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "invalid_command");
    }
}
