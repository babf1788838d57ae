use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use time::{Date, Month};
use tracing::instrument;

use crate::{
    adapters::inbound::http::{CalendarResponse, DashboardResponse, RevenueResponse},
    app_state::AppState,
    domain::{
        aggregator::{self, RecordFilter},
        calendar,
        models::ProjectRecord,
        TimeWindow,
    },
};

use super::{parse_today, worker_filter, ApiError};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_dashboard))
        .route("/calendar", get(get_calendar))
        .route("/revenue", get(get_revenue))
}

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    window: TimeWindow,
    worker: Option<String>,
    today: Option<String>,
}

#[instrument(name = "GET /dashboard", skip(app_state))]
async fn get_dashboard(
    State(app_state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let today = app_state.today(parse_today(query.today.as_deref())?);
    let worker = worker_filter(query.worker);

    let listing = app_state.projects.list_projects(None).await;
    let workers = app_state.roster.list().await;

    let filter = RecordFilter::new(query.window, today).with_worker(worker.as_ref());
    let summary = aggregator::summarize(&listing.records, &filter);
    let workload = aggregator::workload_report(&summary, &workers);

    Ok(Json(DashboardResponse::new(
        query.window,
        today,
        summary,
        workload,
        listing.notice,
    )))
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    year: Option<i32>,
    month: Option<u8>,
    worker: Option<String>,
    /// Restricts the projects shown to those starting in the window.
    #[serde(default)]
    window: TimeWindow,
    today: Option<String>,
}

#[instrument(name = "GET /dashboard/calendar", skip(app_state))]
async fn get_calendar(
    State(app_state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarResponse>, ApiError> {
    let today = app_state.today(parse_today(query.today.as_deref())?);
    let year = query.year.unwrap_or(today.year());
    if !(Date::MIN.year()..=Date::MAX.year()).contains(&year) {
        return Err(ApiError::bad_request(format!("year out of range: {}", year)));
    }
    let month = match query.month {
        Some(m) => Month::try_from(m)
            .map_err(|_| ApiError::bad_request(format!("invalid month: {}", m)))?,
        None => today.month(),
    };
    let worker = worker_filter(query.worker);

    let listing = app_state.projects.list_projects(None).await;
    let workers = app_state.roster.list().await;

    let filter = RecordFilter::new(query.window, today).with_worker(worker.as_ref());
    let records: Vec<ProjectRecord> = filter
        .apply(&listing.records)
        .into_iter()
        .cloned()
        .collect();

    let grid = calendar::project_month(&records, &workers, year, month);

    Ok(Json(CalendarResponse::new(
        &grid,
        app_state.dashboard.calendar_cell_cap,
        listing.notice,
    )))
}

#[derive(Debug, Deserialize)]
pub struct RevenueQuery {
    worker: Option<String>,
}

#[instrument(name = "GET /dashboard/revenue", skip(app_state))]
async fn get_revenue(
    State(app_state): State<AppState>,
    Query(query): Query<RevenueQuery>,
) -> Json<RevenueResponse> {
    let worker = worker_filter(query.worker);
    let listing = app_state.projects.list_projects(None).await;

    let records: Vec<&ProjectRecord> = listing
        .records
        .iter()
        .filter(|r| worker.is_none() || r.assigned_worker == worker)
        .collect();

    Json(RevenueResponse {
        months: aggregator::revenue_by_month(&records)
            .into_iter()
            .map(Into::into)
            .collect(),
        notice: listing.notice,
    })
}
