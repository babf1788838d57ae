//! Row normalisation between spreadsheet rows and domain records.
//!
//! Column names drifted across the sheets' history, so every canonical field
//! is probed under a fixed list of aliases; the first usable value wins.

use serde_json::{Map, Value};
use sheets::{RawRow, SheetName};
use thiserror::Error;

use crate::domain::{
    dates,
    models::{Category, ProjectDetails, ProjectId, ProjectRecord, Status, WorkerId},
};

const ID: &[&str] = &["id", "ID"];
const CATEGORY: &[&str] = &["sheetType", "type", "sheet"];
const PROJECT_NAME: &[&str] = &["projectName", "name", "Title"];
const CLIENT: &[&str] = &["client", "clientName"];
const START_DATE: &[&str] = &["date", "startDate"];
const DEADLINE: &[&str] = &["deadline", "dueDate"];
const STATUS: &[&str] = &["status"];
const ASSIGNED_WORKER: &[&str] = &["assignedTo", "assignedWorker"];
const ESTIMATED_MINUTES: &[&str] = &["totalTime", "estimatedMinutes"];
const ESTIMATED_HOURS: &[&str] = &["estimatedHours"];
const TIME_PER_STONE: &[&str] = &["timePerStone"];
const ACTUAL_MINUTES: &[&str] = &["actualTime", "actualMinutes"];
const ACTUAL_HOURS: &[&str] = &["actualHours"];
const PRICE_PER_UNIT: &[&str] = &["pricePerStone", "pricePerUnit"];
const AGREED_PRICE: &[&str] = &["agreedPrice", "totalPrice"];
const UNIT_COUNT: &[&str] = &["stoneCount", "gemsCount", "unitCount"];
const GOLD_WEIGHT: &[&str] = &["goldWeight", "goldBack"];

#[derive(Debug, Error, PartialEq)]
pub enum ConversionError {
    #[error("row {0} has no category and came from the combined sheet")]
    UnknownCategory(String),
    #[error("row {0} has no readable start date")]
    MissingStartDate(String),
}

pub fn sheet_for(category: Category) -> SheetName {
    match category {
        Category::Alliance => SheetName::Alliance,
        Category::Fassung => SheetName::Fassung,
        Category::Pave => SheetName::Pave,
    }
}

pub fn category_for(sheet: SheetName) -> Option<Category> {
    match sheet {
        SheetName::Alliance => Some(Category::Alliance),
        SheetName::Fassung => Some(Category::Fassung),
        SheetName::Pave => Some(Category::Pave),
        SheetName::All => None,
    }
}

fn non_negative(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v >= 0.0)
}

fn number(row: &RawRow, keys: &[&str]) -> Option<f64> {
    non_negative(row.first_number(keys))
}

/// Convert one fetched row. `index` is the row's position in its sheet and
/// names rows that carry no id of their own.
pub fn to_domain_record(
    row: &RawRow,
    sheet: SheetName,
    index: usize,
) -> Result<ProjectRecord, ConversionError> {
    let id = row
        .first_text(ID)
        .map(ProjectId::from)
        .unwrap_or_else(|| ProjectId::new(format!("{}-{}", sheet, index)));

    let category = row
        .first_text(CATEGORY)
        .and_then(|s| s.parse::<SheetName>().ok())
        .and_then(category_for)
        .or_else(|| category_for(sheet))
        .ok_or_else(|| ConversionError::UnknownCategory(id.to_string()))?;

    let start_date = row
        .first_text(START_DATE)
        .and_then(|s| dates::parse_date(&s))
        .ok_or_else(|| ConversionError::MissingStartDate(id.to_string()))?;

    let unit_count = number(row, UNIT_COUNT).map(|n| n.round() as u32);

    let estimated_minutes = number(row, ESTIMATED_MINUTES)
        .or_else(|| number(row, ESTIMATED_HOURS).map(|h| h * 60.0))
        .or_else(|| {
            number(row, TIME_PER_STONE).map(|t| t * f64::from(unit_count.unwrap_or(0)))
        })
        .unwrap_or(0.0);

    let actual_minutes = number(row, ACTUAL_MINUTES)
        .or_else(|| number(row, ACTUAL_HOURS).map(|h| h * 60.0))
        .unwrap_or(0.0);

    Ok(ProjectRecord {
        id,
        category,
        project_name: row.first_text(PROJECT_NAME).unwrap_or_default(),
        client: row.first_text(CLIENT).unwrap_or_default(),
        start_date,
        deadline: row
            .first_text(DEADLINE)
            .and_then(|s| dates::parse_date(&s)),
        status: row
            .first_text(STATUS)
            .and_then(|s| Status::parse_loose(&s))
            .unwrap_or_default(),
        assigned_worker: row.first_text(ASSIGNED_WORKER).map(WorkerId::from),
        estimated_minutes,
        actual_minutes,
        price_per_unit: number(row, PRICE_PER_UNIT).unwrap_or(0.0),
        agreed_price: number(row, AGREED_PRICE),
        unit_count,
        details: ProjectDetails {
            stone_size: number(row, &["stoneSize"]),
            stone_type: row.first_text(&["stoneType"]),
            material: row.first_text(&["material"]),
            style: row.first_text(&["style"]),
            shape: row.first_text(&["shape"]),
            layout: row.first_text(&["layout"]),
            fixation: row.first_text(&["fixation"]),
            gold_weight: number(row, GOLD_WEIGHT),
        },
    })
}

/// Flat row for writing, using the column names the sheets were created with.
/// Absent values are left out.
pub fn to_row(record: &ProjectRecord) -> Map<String, Value> {
    let mut row = Map::new();
    let mut put = |key: &str, value: Value| {
        row.insert(key.to_string(), value);
    };

    put("id", Value::from(record.id.as_str()));
    put("sheetType", Value::from(record.category.to_string()));
    put("date", Value::from(record.start_date.to_string()));
    if let Some(deadline) = record.deadline {
        put("deadline", Value::from(deadline.to_string()));
    }
    put("projectName", Value::from(record.project_name.as_str()));
    put("client", Value::from(record.client.as_str()));
    put("status", Value::from(record.status.to_string()));
    if let Some(worker) = &record.assigned_worker {
        put("assignedTo", Value::from(worker.as_str()));
    }
    put("totalTime", Value::from(record.estimated_minutes));
    put("actualTime", Value::from(record.actual_minutes));
    put("pricePerStone", Value::from(record.price_per_unit));
    if let Some(price) = record.agreed_price {
        put("agreedPrice", Value::from(price));
    }
    if let Some(count) = record.unit_count {
        put("stoneCount", Value::from(count));
    }

    let details = &record.details;
    let numbers = [
        ("stoneSize", details.stone_size),
        ("goldWeight", details.gold_weight),
    ];
    for (key, value) in numbers {
        if let Some(value) = value {
            put(key, Value::from(value));
        }
    }
    let texts = [
        ("stoneType", &details.stone_type),
        ("material", &details.material),
        ("style", &details.style),
        ("shape", &details.shape),
        ("layout", &details.layout),
        ("fixation", &details.fixation),
    ];
    for (key, value) in texts {
        if let Some(value) = value {
            put(key, Value::from(value.as_str()));
        }
    }

    row
}
