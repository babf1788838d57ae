use async_trait::async_trait;
use time::Date;

use crate::domain::{
    models::{Category, NewProject, ProjectId, ProjectRecord},
    StoreError,
};

/// Outbound port for the collection of project records.
///
/// Implemented by the in-memory store and by the spreadsheet adapter. Rows
/// are fully normalised into `ProjectRecord` before they leave an
/// implementation.
#[async_trait]
pub trait ProjectStore: Send + Sync + 'static {
    async fn fetch_by_category(&self, category: Category)
        -> Result<Vec<ProjectRecord>, StoreError>;

    async fn fetch_all(&self) -> Result<Vec<ProjectRecord>, StoreError>;

    /// Store a new project. The store assigns the id, sets the status to
    /// Pending and defaults the start date to `today`.
    async fn append(
        &self,
        category: Category,
        project: NewProject,
        today: Date,
    ) -> Result<ProjectRecord, StoreError>;

    /// Replace the record with the same id. Last writer wins.
    async fn update(&self, record: ProjectRecord) -> Result<ProjectRecord, StoreError>;

    async fn fetch_one(&self, id: &ProjectId) -> Result<ProjectRecord, StoreError> {
        self.fetch_all()
            .await?
            .into_iter()
            .find(|r| &r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }
}
