use super::dto::CreatePresetRequest;
use super::model::Preset;
use crate::error::AppError;
use crate::state::AppState;
use tracing::info;
use validator::Validate;

pub struct PresetService;

impl PresetService {
    pub async fn create(state: AppState, req: CreatePresetRequest) -> Result<Preset, AppError> {
        req.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let preset = state.storage.store_preset(req.into()).await?;
        info!(preset = %preset.name, "preset stored");
        Ok(preset)
    }

    pub async fn find_all(state: AppState) -> Result<Vec<Preset>, AppError> {
        Ok(state.storage.get_presets().await?)
    }

    pub async fn find_by_name(state: AppState, name: &str) -> Result<Preset, AppError> {
        state.storage.get_preset(name).await.map_err(AppError::lookup)
    }

    /// Looks up the preset a new job refers to. A missing preset is the
    /// caller's fault and surfaces as a 400.
    pub async fn resolve(state: &AppState, name: &str) -> Result<Preset, AppError> {
        match state.storage.get_preset(name).await {
            Ok(preset) => Ok(preset),
            Err(e) if e.is_not_found() => Err(AppError::PresetNotFound(e)),
            Err(e) => Err(AppError::Storage(e)),
        }
    }
}
