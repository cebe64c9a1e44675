use crate::modules::preset::model::Preset;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single transcoding request.
///
/// `preset` is a snapshot taken when the job was created. `status` and
/// `progress` belong to the workers and are kept as plain strings here.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Default, PartialEq, Eq)]
pub struct Job {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub preset: Preset,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub progress: String,
}

impl Job {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}
