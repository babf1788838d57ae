//! Validation of the category intake forms.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    dates,
    models::{Category, NewProject, ProjectDetails, WorkerId},
};

/// Raw form submission. Field names follow the intake forms, with the
/// spreadsheet spellings accepted as aliases.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectForm {
    pub project_name: Option<String>,
    #[serde(alias = "clientName")]
    pub client: Option<String>,
    #[serde(alias = "date")]
    pub start_date: Option<String>,
    #[serde(alias = "dueDate")]
    pub deadline: Option<String>,
    #[serde(alias = "assignedTo")]
    pub assigned_worker: Option<String>,

    #[serde(alias = "totalTime")]
    pub estimated_minutes: Option<f64>,
    /// Alliance only: minutes per stone, multiplied by the stone count when
    /// no total is given.
    pub time_per_stone: Option<f64>,
    #[serde(alias = "pricePerStone")]
    pub price_per_unit: Option<f64>,
    #[serde(alias = "totalPrice")]
    pub agreed_price: Option<f64>,
    #[serde(alias = "stoneCount", alias = "gemsCount")]
    pub unit_count: Option<f64>,
    #[serde(alias = "goldBack")]
    pub gold_weight: Option<f64>,

    pub stone_size: Option<f64>,
    pub stone_type: Option<String>,
    pub material: Option<String>,
    pub style: Option<String>,
    pub shape: Option<String>,
    pub layout: Option<String>,
    pub fixation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
pub struct FormError {
    pub fields: Vec<FieldError>,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid form:")?;
        for (i, e) in self.fields.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{}{} {}", sep, e.field, e.message)?;
        }
        Ok(())
    }
}

impl FormError {
    fn push(&mut self, field: &'static str, message: &'static str) {
        self.fields.push(FieldError { field, message });
    }

    fn required(&mut self, field: &'static str, value: Option<String>) -> String {
        match value.map(|v| v.trim().to_string()) {
            Some(v) if !v.is_empty() => v,
            _ => {
                self.push(field, "is required");
                String::new()
            }
        }
    }

    fn text(&mut self, field: &'static str, value: Option<String>) -> Option<String> {
        let value = value?.trim().to_string();
        if value.is_empty() {
            self.push(field, "must not be blank");
            return None;
        }
        Some(value)
    }

    fn amount(&mut self, field: &'static str, value: Option<f64>) -> Option<f64> {
        let value = value?;
        if !value.is_finite() || value < 0.0 {
            self.push(field, "must be a non-negative number");
            return None;
        }
        Some(value)
    }

    fn count(&mut self, field: &'static str, value: Option<f64>) -> Option<u32> {
        let value = self.amount(field, value)?;
        if value.fract() != 0.0 || value > f64::from(u32::MAX) {
            self.push(field, "must be a whole number");
            return None;
        }
        Some(value as u32)
    }

    fn date(&mut self, field: &'static str, value: Option<String>) -> Option<time::Date> {
        let value = value?;
        if value.trim().is_empty() {
            return None;
        }
        let parsed = dates::parse_date(&value);
        if parsed.is_none() {
            self.push(field, "must be a date (YYYY-MM-DD)");
        }
        parsed
    }
}

impl ProjectForm {
    /// Check every field and collect all problems before giving up.
    pub fn validate(self, category: Category) -> Result<NewProject, FormError> {
        let mut errors = FormError::default();

        let project_name = errors.required("projectName", self.project_name);
        let client = errors.required("client", self.client);
        let start_date = errors.date("startDate", self.start_date);
        let deadline = errors.date("deadline", self.deadline);
        let assigned_worker = self
            .assigned_worker
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .map(WorkerId::from);

        let estimated = errors.amount("estimatedMinutes", self.estimated_minutes);
        let time_per_stone = errors.amount("timePerStone", self.time_per_stone);
        let price_per_unit = errors.amount("pricePerUnit", self.price_per_unit);
        let agreed_price = errors.amount("agreedPrice", self.agreed_price);
        let unit_count = errors.count("unitCount", self.unit_count);

        let details = ProjectDetails {
            stone_size: errors.amount("stoneSize", self.stone_size),
            stone_type: errors.text("stoneType", self.stone_type),
            material: errors.text("material", self.material),
            style: errors.text("style", self.style),
            shape: errors.text("shape", self.shape),
            layout: errors.text("layout", self.layout),
            fixation: errors.text("fixation", self.fixation),
            gold_weight: errors.amount("goldWeight", self.gold_weight),
        };

        let estimated_minutes = match (category, estimated) {
            (_, Some(total)) => total,
            (Category::Alliance, None) => {
                time_per_stone.unwrap_or(0.0) * f64::from(unit_count.unwrap_or(0))
            }
            (_, None) => 0.0,
        };

        if !errors.fields.is_empty() {
            return Err(errors);
        }

        Ok(NewProject {
            project_name,
            client,
            start_date,
            deadline,
            assigned_worker,
            estimated_minutes,
            price_per_unit: price_per_unit.unwrap_or(0.0),
            agreed_price,
            unit_count,
            details,
        })
    }
}
