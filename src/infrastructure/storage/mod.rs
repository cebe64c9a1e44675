use crate::config::settings::{AppConfig, StorageBackend};
use crate::infrastructure::redis::client::RedisService;
use crate::modules::job::model::Job;
use crate::modules::preset::model::Preset;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

pub mod memory;
pub mod redis;

pub use memory::MemoryStorage;
pub use self::redis::RedisStorage;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("redis: {0}")]
    Redis(#[from] ::redis::RedisError),
    #[error("decoding stored record: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence contract for jobs and presets.
///
/// Writes overwrite on key conflict. `get_jobs` gives no ordering guarantee.
/// `clear_database` must never expose a half-cleared store to readers.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn store_job(&self, job: Job) -> StoreResult<Job>;
    async fn get_jobs(&self) -> StoreResult<Vec<Job>>;
    async fn get_job(&self, id: &str) -> StoreResult<Job>;
    async fn store_preset(&self, preset: Preset) -> StoreResult<Preset>;
    async fn get_presets(&self) -> StoreResult<Vec<Preset>>;
    async fn get_preset(&self, name: &str) -> StoreResult<Preset>;
    async fn clear_database(&self) -> StoreResult<()>;
}

pub type DynStorage = Arc<dyn Storage>;

/// Builds the backend selected in configuration.
pub async fn connect(config: &AppConfig) -> anyhow::Result<DynStorage> {
    let storage: DynStorage = match config.storage_backend {
        StorageBackend::Memory => Arc::new(MemoryStorage::new()),
        StorageBackend::Redis => {
            let redis = RedisService::new(&config.redis_url).await?;
            Arc::new(RedisStorage::new(redis))
        }
    };
    Ok(storage)
}
