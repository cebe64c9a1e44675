use super::dto::CreateJobRequest;
use super::model::Job;
use super::service::JobService;
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

/// List all jobs
#[utoipa::path(
    get,
    path = "/jobs",
    responses(
        (status = 200, description = "List of jobs, in no particular order", body = Vec<Job>),
        (status = 500, description = "Storage failure")
    ),
    tag = "Jobs"
)]
pub async fn list_jobs(State(state): State<AppState>) -> impl IntoResponse {
    match JobService::find_all(state).await {
        Ok(jobs) => (StatusCode::OK, Json(jobs)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Create a new job from a stored preset
#[utoipa::path(
    post,
    path = "/jobs",
    request_body = CreateJobRequest,
    responses(
        (status = 200, description = "Job created", body = Job),
        (status = 400, description = "Malformed body or unknown preset"),
        (status = 500, description = "Storage failure")
    ),
    tag = "Jobs"
)]
pub async fn create_job(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let payload = match parse_json::<CreateJobRequest>(&body) {
        Ok(payload) => payload,
        Err(e) => return ApiError::from(e).into_response(),
    };

    match JobService::create(state, payload).await {
        Ok(job) => (StatusCode::OK, Json(job)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Get job by ID
#[utoipa::path(
    get,
    path = "/jobs/{id}",
    params(
        ("id" = String, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job details", body = Job),
        (status = 400, description = "Malformed job id"),
        (status = 404, description = "Job not found")
    ),
    tag = "Jobs"
)]
pub async fn get_job(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> impl IntoResponse {
    let Path(id) = match id {
        Ok(id) => id,
        Err(rejection) => {
            return ApiError::from(AppError::Validation(rejection.body_text())).into_response();
        }
    };

    match JobService::find_by_id(state, &id).await {
        Ok(job) => (StatusCode::OK, Json(job)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
