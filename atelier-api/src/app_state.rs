use std::sync::Arc;

use time::Date;

use crate::{
    adapters::outbound::{memory::InMemoryProjectStore, sheets::SheetsProjectStore},
    config::{DashboardSettings, StoreBackend, StoreSettings},
    domain::{
        dates,
        ports::{inbound::ProjectService, outbound::ProjectStore},
        services::ProjectServiceImpl,
        WorkerRoster,
    },
};

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error("sheets store selected but no url configured")]
    MissingSheetsUrl,
    #[error(transparent)]
    Sheets(#[from] sheets::SheetsError),
}

#[derive(Clone)]
pub struct AppState {
    pub projects: Arc<dyn ProjectService>,
    pub roster: Arc<WorkerRoster>,
    pub dashboard: DashboardSettings,
}

impl AppState {
    pub fn new(
        store: Arc<dyn ProjectStore>,
        roster: WorkerRoster,
        dashboard: DashboardSettings,
    ) -> Self {
        Self {
            projects: Arc::new(ProjectServiceImpl::new(store)),
            roster: Arc::new(roster),
            dashboard,
        }
    }

    /// Build the configured store backend and roster.
    pub fn from_settings(
        store_settings: &StoreSettings,
        dashboard: DashboardSettings,
    ) -> Result<Self, AppStateError> {
        let store: Arc<dyn ProjectStore> = match store_settings.backend {
            StoreBackend::Memory => {
                let store = if store_settings.seed_demo_data {
                    InMemoryProjectStore::demo()
                } else {
                    InMemoryProjectStore::default()
                };
                Arc::new(store.with_latency(store_settings.latency()))
            }
            StoreBackend::Sheets => {
                let url = store_settings
                    .sheets_url
                    .as_deref()
                    .ok_or(AppStateError::MissingSheetsUrl)?;
                let client = sheets::SheetsClient::new(sheets::SheetsURL::new(url)?);
                Arc::new(SheetsProjectStore::new(client))
            }
        };

        let roster = if store_settings.seed_demo_data {
            WorkerRoster::demo()
        } else {
            WorkerRoster::default()
        };

        tracing::info!("Using {} project store", store_settings.backend);
        Ok(Self::new(store, roster, dashboard))
    }

    /// The caller's pinned date, or the server's local date.
    pub fn today(&self, pinned: Option<Date>) -> Date {
        pinned.unwrap_or_else(dates::today_local)
    }
}
