use super::{Storage, StoreError, StoreResult};
use crate::modules::job::model::Job;
use crate::modules::preset::model::Preset;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    jobs: HashMap<String, Job>,
    presets: HashMap<String, Preset>,
}

/// Process-local backend. Both tables sit behind one lock so a clear is
/// observed all at once.
#[derive(Default)]
pub struct MemoryStorage {
    tables: RwLock<Tables>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn store_job(&self, job: Job) -> StoreResult<Job> {
        let mut tables = self.tables.write().await;
        tables.jobs.insert(job.id.clone(), job.clone());
        Ok(job)
    }

    async fn get_jobs(&self) -> StoreResult<Vec<Job>> {
        let tables = self.tables.read().await;
        Ok(tables.jobs.values().cloned().collect())
    }

    async fn get_job(&self, id: &str) -> StoreResult<Job> {
        let tables = self.tables.read().await;
        tables
            .jobs
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound("job"))
    }

    async fn store_preset(&self, preset: Preset) -> StoreResult<Preset> {
        let mut tables = self.tables.write().await;
        tables.presets.insert(preset.name.clone(), preset.clone());
        Ok(preset)
    }

    async fn get_presets(&self) -> StoreResult<Vec<Preset>> {
        let tables = self.tables.read().await;
        Ok(tables.presets.values().cloned().collect())
    }

    async fn get_preset(&self, name: &str) -> StoreResult<Preset> {
        let tables = self.tables.read().await;
        tables
            .presets
            .get(name)
            .cloned()
            .ok_or(StoreError::NotFound("preset"))
    }

    async fn clear_database(&self) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        tables.jobs.clear();
        tables.presets.clear();
        Ok(())
    }
}
