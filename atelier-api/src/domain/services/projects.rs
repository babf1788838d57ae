use std::sync::Arc;

use async_trait::async_trait;
use time::Date;
use tracing::instrument;

use crate::domain::{
    forms::ProjectForm,
    models::{Category, ProjectId, ProjectRecord},
    ports::{
        inbound::{ProjectListing, ProjectService},
        outbound::ProjectStore,
    },
    ProjectError,
};

/// Implementation of the ProjectService inbound port on top of any
/// ProjectStore.
pub struct ProjectServiceImpl<S: ?Sized> {
    store: Arc<S>,
}

impl<S: ?Sized> ProjectServiceImpl<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: ProjectStore + ?Sized> ProjectService for ProjectServiceImpl<S> {
    #[instrument(skip(self))]
    async fn list_projects(&self, category: Option<Category>) -> ProjectListing {
        let fetched = match category {
            Some(category) => self.store.fetch_by_category(category).await,
            None => self.store.fetch_all().await,
        };

        match fetched {
            Ok(records) => ProjectListing {
                records,
                notice: None,
            },
            Err(e) => {
                tracing::warn!("Failed to fetch projects: {}", e);
                ProjectListing {
                    records: Vec::new(),
                    notice: Some(format!("Projects could not be loaded: {}", e)),
                }
            }
        }
    }

    async fn get_project(&self, id: &ProjectId) -> Result<ProjectRecord, ProjectError> {
        Ok(self.store.fetch_one(id).await?)
    }

    #[instrument(skip(self, form))]
    async fn create_project(
        &self,
        category: Category,
        form: ProjectForm,
        today: Date,
    ) -> Result<ProjectRecord, ProjectError> {
        let project = form.validate(category)?;
        let record = self.store.append(category, project, today).await?;
        tracing::info!("Created {} project {}", category, record.id);
        Ok(record)
    }

    #[instrument(skip(self, record), fields(id = %record.id))]
    async fn update_project(&self, record: ProjectRecord) -> Result<ProjectRecord, ProjectError> {
        let current = self.store.fetch_one(&record.id).await?;
        if current.category != record.category {
            return Err(ProjectError::CategoryChanged {
                id: record.id,
                current: current.category,
                requested: record.category,
            });
        }

        Ok(self.store.update(record).await?)
    }
}
