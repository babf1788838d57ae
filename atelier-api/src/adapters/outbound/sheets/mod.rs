mod conversions;

use async_trait::async_trait;
use futures::future::try_join_all;
use sheets::{RawRow, SheetName, SheetsClient, SheetsError};
use time::Date;

use crate::domain::{
    models::{Category, NewProject, ProjectId, ProjectRecord},
    ports::outbound::ProjectStore,
    StoreError,
};

use self::conversions::{sheet_for, to_domain_record, to_row};

/// Adapter that wraps the spreadsheet client to implement the ProjectStore port.
pub struct SheetsProjectStore {
    client: SheetsClient,
}

impl SheetsProjectStore {
    pub fn new(client: SheetsClient) -> Self {
        Self { client }
    }

    async fn fetch_sheet(&self, sheet: SheetName) -> Result<Vec<ProjectRecord>, StoreError> {
        let rows = self
            .client
            .fetch_rows(sheet)
            .await
            .map_err(map_sheets_error)?;
        Ok(convert_rows(&rows, sheet))
    }
}

/// Normalise fetched rows, dropping the ones that cannot become a record.
fn convert_rows(rows: &[RawRow], sheet: SheetName) -> Vec<ProjectRecord> {
    rows.iter()
        .enumerate()
        .filter_map(|(index, row)| match to_domain_record(row, sheet, index) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Skipping row from {}: {}", sheet, e);
                None
            }
        })
        .collect()
}

fn map_sheets_error(err: SheetsError) -> StoreError {
    match err {
        SheetsError::Rejected(msg) => StoreError::Rejected(msg),
        other => StoreError::unavailable(other.to_string()),
    }
}

#[async_trait]
impl ProjectStore for SheetsProjectStore {
    async fn fetch_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<ProjectRecord>, StoreError> {
        let records = self.fetch_sheet(sheet_for(category)).await?;
        Ok(records
            .into_iter()
            .filter(|r| r.category == category)
            .collect())
    }

    /// The three category sheets are fetched concurrently; any failure fails
    /// the whole fetch.
    async fn fetch_all(&self) -> Result<Vec<ProjectRecord>, StoreError> {
        let sheets = try_join_all(
            SheetName::CATEGORIES
                .into_iter()
                .map(|sheet| self.fetch_sheet(sheet)),
        )
        .await?;

        Ok(sheets.into_iter().flatten().collect())
    }

    async fn append(
        &self,
        category: Category,
        project: NewProject,
        today: Date,
    ) -> Result<ProjectRecord, StoreError> {
        let record = project.into_record(ProjectId::generate(), category, today);
        self.client
            .append_row(sheet_for(category), to_row(&record))
            .await
            .map_err(map_sheets_error)?;
        Ok(record)
    }

    async fn update(&self, record: ProjectRecord) -> Result<ProjectRecord, StoreError> {
        self.client
            .update_row(sheet_for(record.category), to_row(&record))
            .await
            .map_err(map_sheets_error)?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    fn rows(value: Value) -> Vec<RawRow> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn convert_rows_skips_unplaceable_rows_and_keeps_order() {
        let fetched = rows(json!([
            { "id": "f2", "date": "2025-02-01" },
            { "id": "broken" },
            { "id": "f1", "date": "2025-01-01" }
        ]));

        let records = convert_rows(&fetched, SheetName::Fassung);

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["f2", "f1"]);
        assert!(records.iter().all(|r| r.category == Category::Fassung));
    }

    #[test]
    fn rejected_writes_keep_their_message() {
        let err = map_sheets_error(SheetsError::Rejected("sheet locked".to_string()));
        assert!(matches!(err, StoreError::Rejected(msg) if msg == "sheet locked"));

        let err = map_sheets_error(SheetsError::ResponseError("timeout".to_string()));
        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_unavailable() {
        let url = sheets::SheetsURL::new("http://127.0.0.1:9/exec").unwrap();
        let store = SheetsProjectStore::new(SheetsClient::new(url));

        let result = store.fetch_all().await;

        assert!(matches!(result, Err(StoreError::Unavailable(_))));
    }
}
