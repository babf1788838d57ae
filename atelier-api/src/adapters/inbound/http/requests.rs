//! HTTP request bodies that map onto domain records.

use serde::Deserialize;

use crate::domain::{
    dates,
    models::{Category, ProjectDetails, ProjectId, ProjectRecord, Status, WorkerId},
};

/// Full record sent back by the edit view. Identity comes from the path.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub category: Category,
    pub project_name: String,
    pub client: String,
    pub start_date: String,
    pub deadline: Option<String>,
    pub status: Status,
    pub assigned_worker: Option<String>,
    #[serde(default)]
    pub estimated_minutes: f64,
    #[serde(default)]
    pub actual_minutes: f64,
    #[serde(default)]
    pub price_per_unit: f64,
    pub agreed_price: Option<f64>,
    pub unit_count: Option<u32>,
    pub stone_size: Option<f64>,
    pub stone_type: Option<String>,
    pub material: Option<String>,
    pub style: Option<String>,
    pub shape: Option<String>,
    pub layout: Option<String>,
    pub fixation: Option<String>,
    pub gold_weight: Option<f64>,
}

impl UpdateProjectRequest {
    /// Errors name the first field that could not be read.
    pub fn into_record(self, id: ProjectId) -> Result<ProjectRecord, String> {
        let start_date = dates::parse_date(&self.start_date)
            .ok_or_else(|| format!("startDate is not a date: {}", self.start_date))?;
        let deadline = match self.deadline.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(s) => Some(
                dates::parse_date(s).ok_or_else(|| format!("deadline is not a date: {}", s))?,
            ),
        };

        let amounts = [
            ("estimatedMinutes", Some(self.estimated_minutes)),
            ("actualMinutes", Some(self.actual_minutes)),
            ("pricePerUnit", Some(self.price_per_unit)),
            ("agreedPrice", self.agreed_price),
            ("stoneSize", self.stone_size),
            ("goldWeight", self.gold_weight),
        ];
        if let Some((field, _)) = amounts
            .iter()
            .find(|(_, v)| v.is_some_and(|v| !v.is_finite() || v < 0.0))
        {
            return Err(format!("{} must be a non-negative number", field));
        }

        Ok(ProjectRecord {
            id,
            category: self.category,
            project_name: self.project_name,
            client: self.client,
            start_date,
            deadline,
            status: self.status,
            assigned_worker: self
                .assigned_worker
                .filter(|w| !w.trim().is_empty())
                .map(WorkerId::from),
            estimated_minutes: self.estimated_minutes,
            actual_minutes: self.actual_minutes,
            price_per_unit: self.price_per_unit,
            agreed_price: self.agreed_price,
            unit_count: self.unit_count,
            details: ProjectDetails {
                stone_size: self.stone_size,
                stone_type: self.stone_type,
                material: self.material,
                style: self.style,
                shape: self.shape,
                layout: self.layout,
                fixation: self.fixation,
                gold_weight: self.gold_weight,
            },
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct AddWorkerRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetHoursRequest {
    pub extra_hours: f64,
    pub base_hours: Option<f64>,
}
