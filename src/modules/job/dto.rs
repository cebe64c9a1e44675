use serde::Deserialize;
use utoipa::ToSchema;

/// Body of `POST /jobs`. `preset` is the preset's name, not the preset itself.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateJobRequest {
    pub source: String,
    pub destination: String,
    pub preset: String,
}
