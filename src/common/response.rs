use crate::error::AppError;
use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::error;

/// Content type every `/jobs` and `/presets` response carries.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

pub fn json_content_type() -> HeaderValue {
    HeaderValue::from_static(JSON_CONTENT_TYPE)
}

/// Error envelope, rendered as `{"error": "<message>"}`.
pub struct ApiError(pub String, pub StatusCode);

impl ApiError {
    pub fn body(&self) -> String {
        // serde_json::Value's Display handles escaping of the message
        format!(
            "{{\"error\": {}}}",
            serde_json::Value::String(self.0.clone())
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = self.body();
        (
            self.1,
            [(header::CONTENT_TYPE, json_content_type())],
            body,
        )
            .into_response()
    }
}

/// Fallback for `/jobs` and `/presets` paths hit with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError("method not allowed".to_string(), StatusCode::METHOD_NOT_ALLOWED)
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        if let AppError::Storage(source) = &err {
            error!("storage backend error: {}", source);
        }
        let status = err.status_code();
        ApiError(err.public_message(), status)
    }
}
