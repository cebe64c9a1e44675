use crate::error::AppError;
use serde::de::DeserializeOwned;

/// Decodes a JSON request body. Clients are not required to send a
/// `Content-Type` header; bodies that do not decode are a 400.
pub fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::Validation(format!("invalid request body: {}", e)))
}
