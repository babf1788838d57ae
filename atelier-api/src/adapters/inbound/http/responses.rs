//! HTTP response types for the dashboard endpoints.
//!
//! These types serialize to the JSON format expected by the frontend.

use serde::Serialize;
use time::{Date, Month};

use crate::domain::{
    aggregator::{MonthlyRevenue, StatusCounts, Summary, WorkloadEntry, WorkloadReport},
    calendar::{CalendarDay, CalendarEntry, CalendarMonth},
    insights::ProjectInsights,
    models::{Category, ProjectRecord, Status, Worker},
    TimeWindow,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: String,
    pub category: Category,
    pub project_name: String,
    pub client: String,
    /// Date in YYYY-MM-DD format.
    pub start_date: String,
    pub deadline: Option<String>,
    pub status: Status,
    pub assigned_worker: Option<String>,
    pub estimated_minutes: f64,
    pub actual_minutes: f64,
    pub price_per_unit: f64,
    pub agreed_price: Option<f64>,
    pub unit_count: Option<u32>,
    /// Agreed price, or unit price times unit count.
    pub revenue: f64,
    pub stone_size: Option<f64>,
    pub stone_type: Option<String>,
    pub material: Option<String>,
    pub style: Option<String>,
    pub shape: Option<String>,
    pub layout: Option<String>,
    pub fixation: Option<String>,
    pub gold_weight: Option<f64>,
}

impl From<&ProjectRecord> for ProjectResponse {
    fn from(record: &ProjectRecord) -> Self {
        let details = record.details.clone();
        Self {
            id: record.id.to_string(),
            category: record.category,
            project_name: record.project_name.clone(),
            client: record.client.clone(),
            start_date: record.start_date.to_string(),
            deadline: record.deadline.map(|d| d.to_string()),
            status: record.status,
            assigned_worker: record.assigned_worker.as_ref().map(|w| w.to_string()),
            estimated_minutes: record.estimated_minutes,
            actual_minutes: record.actual_minutes,
            price_per_unit: record.price_per_unit,
            agreed_price: record.agreed_price,
            unit_count: record.unit_count,
            revenue: record.revenue(),
            stone_size: details.stone_size,
            stone_type: details.stone_type,
            material: details.material,
            style: details.style,
            shape: details.shape,
            layout: details.layout,
            fixation: details.fixation,
            gold_weight: details.gold_weight,
        }
    }
}

/// The project table. `notice` is set when the store could not be read.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTableResponse {
    pub projects: Vec<ProjectResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsResponse {
    pub days_to_deadline: Option<i64>,
    pub progress_percent: f64,
    pub price_alert: bool,
}

impl From<ProjectInsights> for InsightsResponse {
    fn from(insights: ProjectInsights) -> Self {
        Self {
            days_to_deadline: insights.days_to_deadline,
            progress_percent: insights.progress_percent,
            price_alert: insights.price_alert,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetailResponse {
    pub project: ProjectResponse,
    pub insights: InsightsResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCountsResponse {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl From<StatusCounts> for StatusCountsResponse {
    fn from(counts: StatusCounts) -> Self {
        Self {
            pending: counts.pending,
            in_progress: counts.in_progress,
            completed: counts.completed,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadResponse {
    pub worker_id: String,
    pub name: String,
    pub assigned_hours: f64,
    pub capacity_hours: f64,
    pub utilization_percent: u32,
    pub overloaded: bool,
}

impl From<WorkloadEntry> for WorkloadResponse {
    fn from(entry: WorkloadEntry) -> Self {
        Self {
            worker_id: entry.worker_id.to_string(),
            name: entry.name,
            assigned_hours: entry.assigned_hours,
            capacity_hours: entry.capacity_hours,
            utilization_percent: entry.utilization_percent,
            overloaded: entry.overloaded,
        }
    }
}

/// KPI summary for one window.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub window: TimeWindow,
    pub today: String,
    pub total: usize,
    pub counts: StatusCountsResponse,
    pub completed_revenue: f64,
    pub workload: Vec<WorkloadResponse>,
    pub unassigned_hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl DashboardResponse {
    pub fn new(
        window: TimeWindow,
        today: Date,
        summary: Summary,
        workload: WorkloadReport,
        notice: Option<String>,
    ) -> Self {
        Self {
            window,
            today: today.to_string(),
            total: summary.total,
            counts: summary.counts.into(),
            completed_revenue: summary.completed_revenue,
            workload: workload.workers.into_iter().map(Into::into).collect(),
            unassigned_hours: workload.unassigned_hours,
            notice,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthRef {
    pub year: i32,
    pub month: u8,
}

impl From<(i32, Month)> for MonthRef {
    fn from((year, month): (i32, Month)) -> Self {
        Self {
            year,
            month: u8::from(month),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntryResponse {
    pub id: String,
    pub project_name: String,
    pub client: String,
    pub category: Category,
    pub status: Status,
    pub is_start_day: bool,
    /// CSS `hsl(...)` colour.
    pub color: String,
    pub worker_name: Option<String>,
}

impl From<&CalendarEntry<'_>> for CalendarEntryResponse {
    fn from(entry: &CalendarEntry<'_>) -> Self {
        Self {
            id: entry.record.id.to_string(),
            project_name: entry.record.project_name.clone(),
            client: entry.record.client.clone(),
            category: entry.record.category,
            status: entry.record.status,
            is_start_day: entry.is_start_day,
            color: entry.color.to_string(),
            worker_name: entry.worker_name.map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCellResponse {
    pub day: u8,
    pub date: String,
    /// All entries on the day, shown or not.
    pub total: usize,
    /// Entries cut off by the display cap.
    pub hidden: usize,
    pub entries: Vec<CalendarEntryResponse>,
}

impl CalendarCellResponse {
    fn new(day: &CalendarDay<'_>, cap: usize) -> Self {
        Self {
            day: day.day(),
            date: day.date.to_string(),
            total: day.entries.len(),
            hidden: day.hidden(cap),
            entries: day.entries.iter().take(cap).map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarResponse {
    pub year: i32,
    pub month: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<MonthRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<MonthRef>,
    pub cell_cap: usize,
    /// 42 cells, Monday first; `null` pads outside the month.
    pub cells: Vec<Option<CalendarCellResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl CalendarResponse {
    pub fn new(grid: &CalendarMonth<'_>, cap: usize, notice: Option<String>) -> Self {
        Self {
            year: grid.year,
            month: u8::from(grid.month),
            previous: grid.previous().map(Into::into),
            next: grid.next().map(Into::into),
            cell_cap: cap,
            cells: grid
                .cells
                .iter()
                .map(|cell| cell.as_ref().map(|day| CalendarCellResponse::new(day, cap)))
                .collect(),
            notice,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenueResponse {
    /// `YYYY-MM`.
    pub month: String,
    pub revenue: f64,
}

impl From<MonthlyRevenue> for MonthlyRevenueResponse {
    fn from(m: MonthlyRevenue) -> Self {
        Self {
            month: m.month,
            revenue: m.revenue,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueResponse {
    pub months: Vec<MonthlyRevenueResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerResponse {
    pub id: String,
    pub name: String,
    pub base_hours: f64,
    pub extra_hours: f64,
    pub capacity_hours: f64,
}

impl From<Worker> for WorkerResponse {
    fn from(worker: Worker) -> Self {
        Self {
            capacity_hours: worker.capacity(),
            id: worker.id.to_string(),
            name: worker.name,
            base_hours: worker.base_hours,
            extra_hours: worker.extra_hours,
        }
    }
}
