use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    adapters::inbound::http::{
        InsightsResponse, ProjectDetailResponse, ProjectResponse, ProjectTableResponse,
        UpdateProjectRequest,
    },
    app_state::AppState,
    domain::{
        aggregator::RecordFilter,
        forms::ProjectForm,
        insights::ProjectInsights,
        models::{Category, ProjectId, ProjectRecord, Status},
        table::{self, SortKey, SortOrder},
        TimeWindow,
    },
};

use super::{parse_today, worker_filter, ApiError};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_projects)).route(
        "/:key",
        get(get_project).put(update_project).post(create_project),
    )
}

#[derive(Debug, Deserialize)]
pub struct ProjectTableQuery {
    category: Option<String>,
    status: Option<String>,
    worker: Option<String>,
    /// Every record when absent.
    window: Option<TimeWindow>,
    today: Option<String>,
    #[serde(default)]
    sort: SortKey,
    #[serde(default)]
    order: SortOrder,
}

fn parse_category(s: &str) -> Result<Category, ApiError> {
    s.parse::<Category>()
        .map_err(|_| ApiError::not_found(format!("unknown category: {}", s)))
}

#[instrument(name = "GET /projects", skip(app_state))]
async fn list_projects(
    State(app_state): State<AppState>,
    Query(query): Query<ProjectTableQuery>,
) -> Result<Json<ProjectTableResponse>, ApiError> {
    let category = query.category.as_deref().map(parse_category).transpose()?;
    let status = match query.status.as_deref() {
        Some(s) => Some(
            Status::parse_loose(s)
                .ok_or_else(|| ApiError::bad_request(format!("unknown status: {}", s)))?,
        ),
        None => None,
    };
    let worker = worker_filter(query.worker);
    let today = app_state.today(parse_today(query.today.as_deref())?);

    let listing = app_state.projects.list_projects(category).await;

    let filter = RecordFilter::new(query.window.unwrap_or(TimeWindow::All), today)
        .with_worker(worker.as_ref());
    let mut rows: Vec<&ProjectRecord> = filter
        .apply(&listing.records)
        .into_iter()
        .filter(|r| status.map_or(true, |s| r.status == s))
        .collect();
    table::sort_records(&mut rows, query.sort, query.order);

    Ok(Json(ProjectTableResponse {
        projects: rows.into_iter().map(ProjectResponse::from).collect(),
        notice: listing.notice,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ProjectDetailQuery {
    today: Option<String>,
}

#[instrument(name = "GET /projects/:id", skip(app_state))]
async fn get_project(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ProjectDetailQuery>,
) -> Result<Json<ProjectDetailResponse>, ApiError> {
    let today = app_state.today(parse_today(query.today.as_deref())?);
    let record = app_state.projects.get_project(&ProjectId::from(id)).await?;
    let insights = ProjectInsights::compute(&record, today, app_state.dashboard.hourly_rate);

    Ok(Json(ProjectDetailResponse {
        project: ProjectResponse::from(&record),
        insights: InsightsResponse::from(insights),
    }))
}

#[derive(Debug, Deserialize)]
pub struct CreateProjectQuery {
    today: Option<String>,
}

#[instrument(name = "POST /projects/:category", skip(app_state, body))]
async fn create_project(
    State(app_state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<CreateProjectQuery>,
    body: Result<Json<ProjectForm>, JsonRejection>,
) -> Result<(StatusCode, Json<ProjectResponse>), ApiError> {
    let category = parse_category(&category)?;
    let Json(form) = body?;
    let today = app_state.today(parse_today(query.today.as_deref())?);

    let record = app_state
        .projects
        .create_project(category, form, today)
        .await?;

    Ok((StatusCode::CREATED, Json(ProjectResponse::from(&record))))
}

#[instrument(name = "PUT /projects/:id", skip(app_state, body))]
async fn update_project(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateProjectRequest>, JsonRejection>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let Json(body) = body?;
    let record = body
        .into_record(ProjectId::from(id))
        .map_err(ApiError::unprocessable)?;

    let updated = app_state.projects.update_project(record).await?;

    Ok(Json(ProjectResponse::from(&updated)))
}
