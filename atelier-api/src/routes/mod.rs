pub(crate) mod dashboard;
pub(crate) mod error;
pub(crate) mod projects;
pub(crate) mod workers;

pub(crate) use error::ApiError;

use time::Date;

use crate::domain::{dates, models::WorkerId};

/// `?today=YYYY-MM-DD` pins "now" for date-relative views.
fn parse_today(today: Option<&str>) -> Result<Option<Date>, ApiError> {
    match today.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => dates::parse_date(s)
            .map(Some)
            .ok_or_else(|| ApiError::bad_request(format!("could not parse date: {}", s))),
    }
}

/// `?worker=` filter; empty and `all` mean every worker.
fn worker_filter(worker: Option<String>) -> Option<WorkerId> {
    worker
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty() && !w.eq_ignore_ascii_case("all"))
        .map(WorkerId::from)
}
