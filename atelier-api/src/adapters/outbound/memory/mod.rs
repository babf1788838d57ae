//! In-memory project store.

mod seed;

use std::time::Duration;

use async_trait::async_trait;
use time::Date;
use tokio::sync::RwLock;

use crate::domain::{
    models::{Category, NewProject, ProjectId, ProjectRecord},
    ports::outbound::ProjectStore,
    StoreError,
};

/// Records kept for the lifetime of the process, newest first.
#[derive(Debug, Default)]
pub struct InMemoryProjectStore {
    records: RwLock<Vec<ProjectRecord>>,
    latency: Option<Duration>,
}

impl InMemoryProjectStore {
    pub fn new(records: Vec<ProjectRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            latency: None,
        }
    }

    /// Seeded with the seven sample projects of the demo workshop.
    pub fn demo() -> Self {
        Self::new(seed::demo_projects())
    }

    /// Delay every call, to exercise loading states against a local store.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = (!latency.is_zero()).then_some(latency);
        self
    }

    async fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn fetch_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<ProjectRecord>, StoreError> {
        self.simulate_latency().await;
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.category == category)
            .cloned()
            .collect())
    }

    async fn fetch_all(&self) -> Result<Vec<ProjectRecord>, StoreError> {
        self.simulate_latency().await;
        Ok(self.records.read().await.clone())
    }

    async fn append(
        &self,
        category: Category,
        project: NewProject,
        today: Date,
    ) -> Result<ProjectRecord, StoreError> {
        self.simulate_latency().await;
        let record = project.into_record(ProjectId::generate(), category, today);
        self.records.write().await.insert(0, record.clone());
        Ok(record)
    }

    async fn update(&self, record: ProjectRecord) -> Result<ProjectRecord, StoreError> {
        self.simulate_latency().await;
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or_else(|| StoreError::NotFound(record.id.clone()))?;
        *slot = record.clone();
        Ok(record)
    }
}
