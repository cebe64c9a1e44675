use super::dto::CreatePresetRequest;
use super::model::Preset;
use super::service::PresetService;
use crate::common::request::parse_json;
use crate::common::response::ApiError;
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};

/// List all presets
#[utoipa::path(
    get,
    path = "/presets",
    responses(
        (status = 200, description = "List of presets", body = Vec<Preset>),
        (status = 500, description = "Storage failure")
    ),
    tag = "Presets"
)]
pub async fn list_presets(State(state): State<AppState>) -> impl IntoResponse {
    match PresetService::find_all(state).await {
        Ok(presets) => (StatusCode::OK, Json(presets)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Store a preset, replacing any preset with the same name
#[utoipa::path(
    post,
    path = "/presets",
    request_body = CreatePresetRequest,
    responses(
        (status = 200, description = "Preset stored", body = Preset),
        (status = 400, description = "Bad Request"),
        (status = 500, description = "Storage failure")
    ),
    tag = "Presets"
)]
pub async fn create_preset(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let payload = match parse_json::<CreatePresetRequest>(&body) {
        Ok(payload) => payload,
        Err(e) => return ApiError::from(e).into_response(),
    };

    match PresetService::create(state, payload).await {
        Ok(preset) => (StatusCode::OK, Json(preset)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Get preset by name
#[utoipa::path(
    get,
    path = "/presets/{name}",
    params(
        ("name" = String, Path, description = "Preset name")
    ),
    responses(
        (status = 200, description = "Preset details", body = Preset),
        (status = 400, description = "Malformed preset name"),
        (status = 404, description = "Preset not found")
    ),
    tag = "Presets"
)]
pub async fn get_preset(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> impl IntoResponse {
    let Path(name) = match name {
        Ok(name) => name,
        Err(rejection) => {
            return ApiError::from(AppError::Validation(rejection.body_text())).into_response();
        }
    };

    match PresetService::find_by_name(state, &name).await {
        Ok(preset) => (StatusCode::OK, Json(preset)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
