use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::{Date, Duration};

use super::{ProjectId, WorkerId};

/// The three kinds of work the workshop takes on. Fixed at creation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumString,
)]
pub enum Category {
    #[strum(ascii_case_insensitive, serialize = "Alliance")]
    Alliance,
    #[strum(ascii_case_insensitive, serialize = "Fassung")]
    Fassung,
    #[serde(alias = "Pavé")]
    #[strum(ascii_case_insensitive, to_string = "Pave", serialize = "Pavé")]
    Pave,
}

/// Lifecycle of a project. Only changed by explicit user action.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
pub enum Status {
    #[default]
    Pending,
    #[serde(alias = "In Progress", alias = "in_progress")]
    #[strum(to_string = "In Progress")]
    InProgress,
    Completed,
}

impl Status {
    /// Lenient parse for values typed into spreadsheets by hand
    /// ("In Progress", "in_progress", "completed", ...).
    pub fn parse_loose(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "pending" | "open" | "new" => Some(Status::Pending),
            "inprogress" | "active" | "started" => Some(Status::InProgress),
            "completed" | "complete" | "done" | "finished" => Some(Status::Completed),
            _ => None,
        }
    }
}

/// Descriptive attributes. Which of them apply depends on the category; none
/// of them feed into any computation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDetails {
    /// Stone diameter in millimetres.
    pub stone_size: Option<f64>,
    pub stone_type: Option<String>,
    pub material: Option<String>,
    pub style: Option<String>,
    pub shape: Option<String>,
    pub layout: Option<String>,
    pub fixation: Option<String>,
    /// Grams of gold.
    pub gold_weight: Option<f64>,
}

/// A single project in the workshop.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub category: Category,
    pub project_name: String,
    pub client: String,
    pub start_date: Date,
    pub deadline: Option<Date>,
    pub status: Status,
    pub assigned_worker: Option<WorkerId>,
    pub estimated_minutes: f64,
    pub actual_minutes: f64,
    /// CHF per stone/unit.
    pub price_per_unit: f64,
    /// CHF agreed with the client, when fixed.
    pub agreed_price: Option<f64>,
    pub unit_count: Option<u32>,
    pub details: ProjectDetails,
}

impl ProjectRecord {
    /// Revenue attributed to this project: the agreed price, or
    /// `price_per_unit × unit_count` when none (or zero) was agreed.
    pub fn revenue(&self) -> f64 {
        match self.agreed_price {
            Some(price) if price > 0.0 => price,
            _ => self.price_per_unit * f64::from(self.unit_count.unwrap_or(0)),
        }
    }

    pub fn estimated_hours(&self) -> f64 {
        self.estimated_minutes / 60.0
    }

    pub fn is_completed(&self) -> bool {
        self.status == Status::Completed
    }

    /// Last day the project occupies on the calendar.
    ///
    /// Without a deadline the span is the start day plus the following day.
    /// A deadline before the start collapses the span to the start day.
    pub fn span_end(&self) -> Date {
        match self.deadline {
            Some(deadline) if deadline >= self.start_date => deadline,
            Some(_) => self.start_date,
            None => self
                .start_date
                .checked_add(Duration::days(1))
                .unwrap_or(self.start_date),
        }
    }

    /// Whether `day` lies within `[start_date, span_end]`, both inclusive.
    pub fn covers(&self, day: Date) -> bool {
        day >= self.start_date && day <= self.span_end()
    }
}

/// The fields a caller supplies when appending a project. Identity, status
/// and category are assigned by the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProject {
    pub project_name: String,
    pub client: String,
    pub start_date: Option<Date>,
    pub deadline: Option<Date>,
    pub assigned_worker: Option<WorkerId>,
    pub estimated_minutes: f64,
    pub price_per_unit: f64,
    pub agreed_price: Option<f64>,
    pub unit_count: Option<u32>,
    pub details: ProjectDetails,
}

impl NewProject {
    /// Materialise the record: status starts at Pending, no time is logged
    /// yet and the start date defaults to `today`.
    pub fn into_record(self, id: ProjectId, category: Category, today: Date) -> ProjectRecord {
        ProjectRecord {
            id,
            category,
            project_name: self.project_name,
            client: self.client,
            start_date: self.start_date.unwrap_or(today),
            deadline: self.deadline,
            status: Status::Pending,
            assigned_worker: self.assigned_worker,
            estimated_minutes: self.estimated_minutes,
            actual_minutes: 0.0,
            price_per_unit: self.price_per_unit,
            agreed_price: self.agreed_price,
            unit_count: self.unit_count,
            details: self.details,
        }
    }
}


#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::fixtures::record;
    use super::*;

    #[test]
    fn revenue_prefers_agreed_price() {
        let mut r = record("a1", date!(2025 - 10 - 23));
        r.price_per_unit = 59.0;
        r.unit_count = Some(16);
        assert_eq!(r.revenue(), 944.0);

        r.agreed_price = Some(950.0);
        assert_eq!(r.revenue(), 950.0);
    }

    #[test]
    fn zero_agreed_price_falls_back_to_unit_price() {
        let mut r = record("f1", date!(2025 - 10 - 28));
        r.agreed_price = Some(0.0);
        r.price_per_unit = 50.0;
        r.unit_count = Some(2);
        assert_eq!(r.revenue(), 100.0);
    }

    #[test]
    fn revenue_treats_missing_unit_count_as_zero() {
        let mut r = record("f1", date!(2025 - 10 - 28));
        r.price_per_unit = 70.0;
        assert_eq!(r.revenue(), 0.0);
    }

    #[test]
    fn span_without_deadline_covers_next_day() {
        let r = record("p1", date!(2025 - 01 - 31));
        assert_eq!(r.span_end(), date!(2025 - 02 - 01));
        assert!(r.covers(date!(2025 - 02 - 01)));
        assert!(!r.covers(date!(2025 - 02 - 02)));
    }

    #[test]
    fn deadline_before_start_collapses_to_single_day() {
        let mut r = record("p2", date!(2025 - 03 - 10));
        r.deadline = Some(date!(2025 - 03 - 01));
        assert_eq!(r.span_end(), date!(2025 - 03 - 10));
        assert!(r.covers(date!(2025 - 03 - 10)));
        assert!(!r.covers(date!(2025 - 03 - 09)));
    }

    #[test]
    fn new_project_starts_pending_and_defaults_start_date() {
        let today = date!(2025 - 11 - 01);
        let r = NewProject {
            project_name: "Turmalin-Tsavo Ring".to_string(),
            client: "Beyer".to_string(),
            ..Default::default()
        }
        .into_record(ProjectId::new("a2"), Category::Alliance, today);

        assert_eq!(r.status, Status::Pending);
        assert_eq!(r.start_date, today);
        assert_eq!(r.actual_minutes, 0.0);
    }

    #[test]
    fn status_parse_loose_accepts_spreadsheet_spellings() {
        assert_eq!(Status::parse_loose("In Progress"), Some(Status::InProgress));
        assert_eq!(Status::parse_loose("in_progress"), Some(Status::InProgress));
        assert_eq!(Status::parse_loose("completed"), Some(Status::Completed));
        assert_eq!(Status::parse_loose("Pending"), Some(Status::Pending));
        assert_eq!(Status::parse_loose("on hold"), None);
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("alliance".parse::<Category>().unwrap(), Category::Alliance);
        assert_eq!("Pavé".parse::<Category>().unwrap(), Category::Pave);
        assert_eq!("PAVE".parse::<Category>().unwrap(), Category::Pave);
        assert!("ring".parse::<Category>().is_err());
    }
}
