use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, routes};

pub fn create(app_state: AppState, app_url: String) -> Router<()> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            origin.to_str().unwrap_or_default() == app_url
        }));

    Router::new()
        .route("/", get(|| async { "Atelier is running" }))
        .nest("/projects", routes::projects::router())
        .nest("/dashboard", routes::dashboard::router())
        .nest("/workers", routes::workers::router())
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::{
        adapters::outbound::{memory::InMemoryProjectStore, sheets::SheetsProjectStore},
        config::DashboardSettings,
        domain::WorkerRoster,
    };

    const TODAY: &str = "2025-11-05";

    fn demo_app() -> Router {
        let state = AppState::new(
            Arc::new(InMemoryProjectStore::demo()),
            WorkerRoster::demo(),
            DashboardSettings::default(),
        );
        create(state, "http://localhost:5173".to_string())
    }

    fn offline_app() -> Router {
        let url = sheets::SheetsURL::new("http://127.0.0.1:9/exec").unwrap();
        let state = AppState::new(
            Arc::new(SheetsProjectStore::new(sheets::SheetsClient::new(url))),
            WorkerRoster::demo(),
            DashboardSettings::default(),
        );
        create(state, "http://localhost:5173".to_string())
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
        send(app, Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn with_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(app, request).await
    }

    #[tokio::test]
    async fn root_answers() {
        let response = demo_app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn dashboard_summarises_the_year() {
        let app = demo_app();
        let (status, body) = get(&app, &format!("/dashboard?window=year&today={}", TODAY)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 7);
        assert_eq!(body["completedRevenue"], 9200.0);
        assert_eq!(body["counts"], json!({ "pending": 2, "inProgress": 2, "completed": 3 }));
        assert!(body.get("notice").is_none());
    }

    #[tokio::test]
    async fn dashboard_month_window_and_worker_filter() {
        let app = demo_app();

        let (_, month) = get(&app, &format!("/dashboard?today={}", TODAY)).await;
        assert_eq!(month["window"], "month");
        assert_eq!(month["total"], 1);

        let (_, jordi) = get(&app, &format!("/dashboard?window=all&worker=1&today={}", TODAY)).await;
        assert_eq!(jordi["total"], 3);
        assert_eq!(jordi["completedRevenue"], 3200.0);
    }

    #[tokio::test]
    async fn dashboard_reports_workload_per_worker() {
        let app = demo_app();
        let (_, body) = get(&app, &format!("/dashboard?window=all&today={}", TODAY)).await;

        let workload = body["workload"].as_array().unwrap();
        assert_eq!(workload.len(), 3);
        assert_eq!(workload[0]["name"], "Jordi");
        assert_eq!(workload[0]["utilizationPercent"], 81);
        assert_eq!(workload[0]["overloaded"], false);
        assert_eq!(workload[1]["capacityHours"], 37.0);
        assert_eq!(workload[1]["utilizationPercent"], 13);
        assert_eq!(workload[2]["utilizationPercent"], 4);
    }

    #[tokio::test]
    async fn calendar_projects_the_requested_month() {
        let app = demo_app();
        let (status, body) = get(
            &app,
            &format!(
                "/dashboard/calendar?year=2025&month=11&window=all&today={}",
                TODAY
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let cells = body["cells"].as_array().unwrap();
        assert_eq!(cells.len(), 42);
        // 2025-11-01 is a Saturday
        assert!(cells[4].is_null());
        assert_eq!(cells[5]["day"], 1);

        let fifth = &cells[9];
        assert_eq!(fifth["day"], 5);
        assert_eq!(fifth["total"], 4);
        assert_eq!(fifth["hidden"], 0);
        assert_eq!(fifth["entries"][0]["id"], "p1");
        assert_eq!(fifth["entries"][0]["workerName"], "Jordi");
        assert!(fifth["entries"][0]["color"].as_str().unwrap().starts_with("hsl("));

        assert_eq!(body["previous"], json!({ "year": 2025, "month": 10 }));
        assert_eq!(body["next"], json!({ "year": 2025, "month": 12 }));
    }

    #[tokio::test]
    async fn calendar_follows_the_dashboard_window_by_default() {
        let (_, body) = get(
            &demo_app(),
            &format!("/dashboard/calendar?year=2025&month=11&today={}", TODAY),
        )
        .await;

        // Only a2 starts in November
        let fifth = &body["cells"][9];
        assert_eq!(fifth["total"], 1);
        assert_eq!(fifth["entries"][0]["id"], "a2");
        assert_eq!(fifth["entries"][0]["workerName"], "Maria");
    }

    #[tokio::test]
    async fn calendar_rejects_invalid_month() {
        let (status, _) = get(&demo_app(), "/dashboard/calendar?year=2025&month=13").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn calendar_rejects_years_outside_the_date_range() {
        let app = demo_app();

        let (status, body) = get(&app, "/dashboard/calendar?year=200000000&month=1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("200000000"));

        let (status, _) = get(&app, "/dashboard/calendar?year=-2147483648&month=1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = get(&app, "/dashboard/calendar?year=9999&month=12").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["previous"], json!({ "year": 9999, "month": 11 }));
        let days = body["cells"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|c| !c.is_null())
            .count();
        assert_eq!(days, 31);
    }

    #[tokio::test]
    async fn revenue_is_grouped_by_month() {
        let (_, body) = get(&demo_app(), "/dashboard/revenue").await;

        assert_eq!(
            body["months"],
            json!([
                { "month": "2025-07", "revenue": 4500.0 },
                { "month": "2025-08", "revenue": 1500.0 },
                { "month": "2025-09", "revenue": 3200.0 }
            ])
        );
    }

    #[tokio::test]
    async fn project_table_filters_and_sorts() {
        let app = demo_app();
        let (status, body) = get(&app, "/projects?category=pave&sort=revenue&order=asc").await;

        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = body["projects"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["p2", "p1", "p3"]);

        let (_, completed) = get(&app, "/projects?status=completed&worker=3").await;
        assert_eq!(completed["projects"].as_array().unwrap().len(), 1);
        assert_eq!(completed["projects"][0]["id"], "a3");
    }

    #[tokio::test]
    async fn project_table_applies_the_time_window() {
        let app = demo_app();

        // Week of Monday 2025-10-27
        let (status, body) = get(&app, "/projects?window=week&today=2025-10-29").await;
        assert_eq!(status, StatusCode::OK);
        let mut ids: Vec<&str> = body["projects"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_str().unwrap())
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["a2", "f1", "p1"]);

        let (_, jordi) = get(&app, "/projects?window=week&worker=1&today=2025-10-29").await;
        assert_eq!(jordi["projects"].as_array().unwrap().len(), 1);
        assert_eq!(jordi["projects"][0]["id"], "p1");

        let (_, empty) = get(&app, &format!("/projects?window=week&today={}", TODAY)).await;
        assert!(empty["projects"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn project_detail_includes_insights() {
        let (status, body) = get(&demo_app(), &format!("/projects/a1?today={}", TODAY)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["project"]["status"], "InProgress");
        assert_eq!(body["insights"]["daysToDeadline"], 10);
        assert_eq!(body["insights"]["priceAlert"], false);
    }

    #[tokio::test]
    async fn unknown_project_is_404() {
        let (status, body) = get(&demo_app(), "/projects/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("nope"));
    }

    #[tokio::test]
    async fn form_submission_creates_a_pending_project() {
        let app = demo_app();
        let (status, created) = with_json(
            &app,
            "POST",
            &format!("/projects/alliance?today={}", TODAY),
            json!({
                "projectName": "Memoire Ring",
                "clientName": "Suenos",
                "timePerStone": 30,
                "stoneCount": 12,
                "pricePerStone": 45,
                "stoneType": "weiße Diamanten"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["status"], "Pending");
        assert_eq!(created["category"], "Alliance");
        assert_eq!(created["startDate"], TODAY);
        assert_eq!(created["estimatedMinutes"], 360.0);
        assert_eq!(created["actualMinutes"], 0.0);

        let (_, table) = get(&app, "/projects?category=Alliance").await;
        assert_eq!(table["projects"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn invalid_form_lists_every_field() {
        let (status, body) = with_json(
            &demo_app(),
            "POST",
            "/projects/fassung",
            json!({ "projectName": "", "pricePerStone": -1 }),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let fields: Vec<&str> = body["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["projectName", "client", "pricePerUnit"]);
    }

    #[tokio::test]
    async fn unknown_category_is_404() {
        let (status, _) = with_json(&demo_app(), "POST", "/projects/brooch", json!({})).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_replaces_record_and_refuses_category_change() {
        let app = demo_app();
        let (_, detail) = get(&app, "/projects/f1").await;
        let mut project = detail["project"].clone();
        project["status"] = json!("In Progress");
        project["actualMinutes"] = json!(90);

        let (status, updated) = with_json(&app, "PUT", "/projects/f1", project.clone()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["status"], "InProgress");
        assert_eq!(updated["actualMinutes"], 90.0);

        project["category"] = json!("Pave");
        let (status, _) = with_json(&app, "PUT", "/projects/f1", project).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn workers_can_be_added_and_given_hours() {
        let app = demo_app();

        let (status, added) = with_json(&app, "POST", "/workers", json!({ "name": "Lea" })).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(added["baseHours"], 40.0);
        assert_eq!(added["extraHours"], 0.0);

        let (status, maria) =
            with_json(&app, "PUT", "/workers/2/hours", json!({ "extraHours": 5 })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(maria["capacityHours"], 40.0);

        let (_, workers) = get(&app, "/workers").await;
        assert_eq!(workers.as_array().unwrap().len(), 4);

        let (status, _) =
            with_json(&app, "PUT", "/workers/99/hours", json!({ "extraHours": 1 })).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unreachable_store_degrades_reads_and_fails_writes() {
        let app = offline_app();

        let (status, dashboard) = get(&app, "/dashboard?window=all").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(dashboard["total"], 0);
        assert!(dashboard["notice"].is_string());

        let (status, table) = get(&app, "/projects").await;
        assert_eq!(status, StatusCode::OK);
        assert!(table["projects"].as_array().unwrap().is_empty());

        let (status, body) = with_json(
            &app,
            "POST",
            "/projects/pave",
            json!({ "projectName": "Collier", "client": "Lohri" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body["error"].is_string());
    }
}
