use super::model::Preset;
use serde::Deserialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreatePresetRequest {
    #[validate(length(min = 1, message = "preset name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub video: BTreeMap<String, String>,
    #[serde(default)]
    pub audio: BTreeMap<String, String>,
}

impl From<CreatePresetRequest> for Preset {
    fn from(req: CreatePresetRequest) -> Self {
        Self {
            name: req.name,
            video: req.video,
            audio: req.audio,
        }
    }
}
