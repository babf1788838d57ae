use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::instrument;

use crate::{
    adapters::inbound::http::{AddWorkerRequest, SetHoursRequest, WorkerResponse},
    app_state::AppState,
    domain::models::WorkerId,
};

use super::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_workers).post(add_worker))
        .route("/:id/hours", put(set_hours))
}

#[instrument(name = "GET /workers", skip(app_state))]
async fn list_workers(State(app_state): State<AppState>) -> Json<Vec<WorkerResponse>> {
    let workers = app_state.roster.list().await;
    Json(workers.into_iter().map(WorkerResponse::from).collect())
}

#[instrument(name = "POST /workers", skip(app_state, body))]
async fn add_worker(
    State(app_state): State<AppState>,
    body: Result<Json<AddWorkerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<WorkerResponse>), ApiError> {
    let Json(body) = body?;
    let worker = app_state.roster.add(&body.name).await?;
    tracing::info!("Added worker {} ({})", worker.name, worker.id);

    Ok((StatusCode::CREATED, Json(worker.into())))
}

#[instrument(name = "PUT /workers/:id/hours", skip(app_state, body))]
async fn set_hours(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<SetHoursRequest>, JsonRejection>,
) -> Result<Json<WorkerResponse>, ApiError> {
    let Json(body) = body?;
    let worker = app_state
        .roster
        .set_hours(&WorkerId::from(id), body.extra_hours, body.base_hours)
        .await?;

    Ok(Json(worker.into()))
}
