use super::{Storage, StoreError, StoreResult};
use crate::infrastructure::redis::client::RedisService;
use crate::modules::job::model::Job;
use crate::modules::preset::model::Preset;
use async_trait::async_trait;
use redis::AsyncCommands;

const JOBS_KEY: &str = "snickers:jobs";
const PRESETS_KEY: &str = "snickers:presets";

/// Persistent backend. Jobs and presets live in two hashes, keyed by job id
/// and preset name, with JSON-encoded values.
pub struct RedisStorage {
    redis: RedisService,
}

impl RedisStorage {
    pub fn new(redis: RedisService) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl Storage for RedisStorage {
    async fn store_job(&self, job: Job) -> StoreResult<Job> {
        let mut conn = self.redis.get_conn();
        let payload = serde_json::to_string(&job)?;
        let _: () = conn.hset(JOBS_KEY, &job.id, payload).await?;
        Ok(job)
    }

    async fn get_jobs(&self) -> StoreResult<Vec<Job>> {
        let mut conn = self.redis.get_conn();
        let raw: Vec<String> = conn.hvals(JOBS_KEY).await?;
        raw.iter()
            .map(|s| serde_json::from_str(s).map_err(StoreError::from))
            .collect()
    }

    async fn get_job(&self, id: &str) -> StoreResult<Job> {
        let mut conn = self.redis.get_conn();
        let raw: Option<String> = conn.hget(JOBS_KEY, id).await?;
        let raw = raw.ok_or(StoreError::NotFound("job"))?;
        Ok(serde_json::from_str(&raw)?)
    }

    async fn store_preset(&self, preset: Preset) -> StoreResult<Preset> {
        let mut conn = self.redis.get_conn();
        let payload = serde_json::to_string(&preset)?;
        let _: () = conn.hset(PRESETS_KEY, &preset.name, payload).await?;
        Ok(preset)
    }

    async fn get_presets(&self) -> StoreResult<Vec<Preset>> {
        let mut conn = self.redis.get_conn();
        let raw: Vec<String> = conn.hvals(PRESETS_KEY).await?;
        raw.iter()
            .map(|s| serde_json::from_str(s).map_err(StoreError::from))
            .collect()
    }

    async fn get_preset(&self, name: &str) -> StoreResult<Preset> {
        let mut conn = self.redis.get_conn();
        let raw: Option<String> = conn.hget(PRESETS_KEY, name).await?;
        let raw = raw.ok_or(StoreError::NotFound("preset"))?;
        Ok(serde_json::from_str(&raw)?)
    }

    async fn clear_database(&self) -> StoreResult<()> {
        let mut conn = self.redis.get_conn();
        // MULTI/EXEC so readers never see jobs gone but presets still present.
        let _: () = redis::pipe()
            .atomic()
            .del(JOBS_KEY)
            .ignore()
            .del(PRESETS_KEY)
            .ignore()
            .query_async(&mut conn)
            .await?;
        Ok(())
    }
}
