use time::Date;

use super::models::ProjectRecord;

/// Hourly rate used by the price alert when none is configured, CHF.
pub const DEFAULT_HOURLY_RATE: f64 = 120.0;

/// Per-project indicators shown next to a single record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectInsights {
    /// Whole days until the deadline; negative when overdue.
    pub days_to_deadline: Option<i64>,
    /// Logged time against the estimate, capped at 100.
    pub progress_percent: f64,
    /// Logged time is worth more than the agreed price, or exceeds the estimate.
    pub price_alert: bool,
}

impl ProjectInsights {
    pub fn compute(record: &ProjectRecord, today: Date, hourly_rate: f64) -> Self {
        Self {
            days_to_deadline: days_to_deadline(record, today),
            progress_percent: progress_percent(record),
            price_alert: price_alert(record, hourly_rate),
        }
    }
}

pub fn days_to_deadline(record: &ProjectRecord, today: Date) -> Option<i64> {
    record.deadline.map(|deadline| (deadline - today).whole_days())
}

pub fn progress_percent(record: &ProjectRecord) -> f64 {
    let estimated = if record.estimated_minutes > 0.0 {
        record.estimated_minutes
    } else {
        1.0
    };
    (record.actual_minutes / estimated * 100.0).min(100.0)
}

pub fn price_alert(record: &ProjectRecord, hourly_rate: f64) -> bool {
    let over_price = record
        .agreed_price
        .filter(|agreed| *agreed > 0.0)
        .is_some_and(|agreed| record.actual_minutes / 60.0 * hourly_rate > agreed);

    over_price || record.actual_minutes > record.estimated_minutes
}
