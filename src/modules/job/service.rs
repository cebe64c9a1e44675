use super::dto::CreateJobRequest;
use super::model::Job;
use crate::error::AppError;
use crate::modules::preset::service::PresetService;
use crate::state::AppState;
use tracing::info;
use uuid::Uuid;

pub struct JobService;

impl JobService {
    pub async fn create(state: AppState, req: CreateJobRequest) -> Result<Job, AppError> {
        let preset = PresetService::resolve(&state, &req.preset).await?;

        let job = Job {
            id: Uuid::new_v4().to_string(),
            source: req.source,
            destination: req.destination,
            preset,
            ..Job::default()
        };

        let job = state.storage.store_job(job).await?;
        info!(job = %job.id, preset = %job.preset.name, "job created");
        Ok(job)
    }

    pub async fn find_all(state: AppState) -> Result<Vec<Job>, AppError> {
        Ok(state.storage.get_jobs().await?)
    }

    pub async fn find_by_id(state: AppState, id: &str) -> Result<Job, AppError> {
        state.storage.get_job(id).await.map_err(AppError::lookup)
    }
}
