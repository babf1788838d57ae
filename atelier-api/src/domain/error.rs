use thiserror::Error;

use super::{
    forms::FormError,
    models::{Category, ProjectId, WorkerId},
};

/// Errors raised by a project store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("project not found: {0}")]
    NotFound(ProjectId),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store rejected the write: {0}")]
    Rejected(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

/// Errors from project use cases.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Invalid(#[from] FormError),
    #[error("project {id} is a {current} project and cannot become {requested}")]
    CategoryChanged {
        id: ProjectId,
        current: Category,
        requested: Category,
    },
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("worker not found: {0}")]
    NotFound(WorkerId),
    #[error("worker name must not be blank")]
    BlankName,
    #[error("hours must be non-negative numbers")]
    InvalidHours,
}
