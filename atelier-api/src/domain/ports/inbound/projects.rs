use async_trait::async_trait;
use time::Date;

use crate::domain::{
    forms::ProjectForm,
    models::{Category, ProjectId, ProjectRecord},
    ProjectError,
};

/// Records read for a view. A store failure leaves `records` empty and
/// explains why in `notice`; views render what they have.
#[derive(Debug, Clone, Default)]
pub struct ProjectListing {
    pub records: Vec<ProjectRecord>,
    pub notice: Option<String>,
}

/// Inbound port for the project use cases the HTTP handlers invoke.
#[async_trait]
pub trait ProjectService: Send + Sync + 'static {
    /// Every record, or only those of `category`.
    async fn list_projects(&self, category: Option<Category>) -> ProjectListing;

    async fn get_project(&self, id: &ProjectId) -> Result<ProjectRecord, ProjectError>;

    /// Validate a form submission and append it to the store.
    async fn create_project(
        &self,
        category: Category,
        form: ProjectForm,
        today: Date,
    ) -> Result<ProjectRecord, ProjectError>;

    /// Whole-record update. The category of an existing record never changes.
    async fn update_project(&self, record: ProjectRecord) -> Result<ProjectRecord, ProjectError>;
}
