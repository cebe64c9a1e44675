use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Named encoding profile. The name is the only identity a preset has.
///
/// `video` and `audio` are always emitted, as `{}` when empty, so a
/// zero-valued preset serializes as `{"video":{},"audio":{}}`.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Default, PartialEq, Eq)]
pub struct Preset {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default)]
    pub video: BTreeMap<String, String>,
    #[serde(default)]
    pub audio: BTreeMap<String, String>,
}

impl Preset {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
