use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{
    domain::{RawRow, SheetName, WriteResponse},
    SheetsURL,
};

/// Client for the spreadsheet web app. Reads go through `GET ?sheet=<name>`,
/// writes are `POST`ed as flat JSON objects tagged with the target sheet.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    url: SheetsURL,
    http: reqwest::Client,
}

impl SheetsClient {
    pub fn new(url: SheetsURL) -> Self {
        Self {
            url,
            http: reqwest::Client::new(),
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, url: impl AsRef<str>) -> Result<T, SheetsError> {
        let resp = self
            .http
            .get(url.as_ref())
            .send()
            .await
            .map_err(|e| SheetsError::ResponseError(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(SheetsError::ResponseError(format!(
                "unexpected status {}",
                resp.status()
            )));
        }

        resp.json::<T>().await.map_err(|e| {
            SheetsError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })
    }

    async fn post<B: Serialize>(&self, body: &B) -> Result<WriteResponse, SheetsError> {
        let resp = self
            .http
            .post(self.url.as_ref())
            .json(body)
            .send()
            .await
            .map_err(|e| SheetsError::ResponseError(e.to_string()))?;

        let resp_data = resp.json::<WriteResponse>().await.map_err(|e| {
            SheetsError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })?;

        if !resp_data.is_success() {
            return Err(SheetsError::Rejected(
                resp_data
                    .message
                    .unwrap_or_else(|| format!("status '{}'", resp_data.status)),
            ));
        }

        Ok(resp_data)
    }

    /// Fetch every row of `sheet`. Entries that are not JSON objects are
    /// skipped.
    pub async fn fetch_rows(&self, sheet: SheetName) -> Result<Vec<RawRow>, SheetsError> {
        let url = self.url.with_sheet(sheet);
        let response: RowsResponse = self.fetch(url).await?;

        let rows = response
            .into_rows()
            .into_iter()
            .filter_map(|value| match value {
                Value::Object(fields) => Some(RawRow::new(fields)),
                other => {
                    tracing::warn!("Skipping non-object row in sheet {}: {}", sheet, other);
                    None
                }
            })
            .collect();

        Ok(rows)
    }

    /// Append one row to `sheet`. The web app assigns identity and default
    /// status.
    pub async fn append_row(
        &self,
        sheet: SheetName,
        fields: Map<String, Value>,
    ) -> Result<WriteResponse, SheetsError> {
        let payload = WritePayload {
            sheet,
            action: None,
            fields,
        };
        self.post(&payload).await
    }

    /// Replace the row whose `id` matches the one in `fields`.
    pub async fn update_row(
        &self,
        sheet: SheetName,
        fields: Map<String, Value>,
    ) -> Result<WriteResponse, SheetsError> {
        let payload = WritePayload {
            sheet,
            action: Some("update"),
            fields,
        };
        self.post(&payload).await
    }
}

#[derive(Error, Debug)]
pub enum SheetsError {
    #[error("InvalidUrl: {0}")]
    InvalidUrl(String),
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
    #[error("Rejected: {0}")]
    Rejected(String),
}

/// Older deployments return a bare array, newer ones wrap it in `rows`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RowsResponse {
    Bare(Vec<Value>),
    Wrapped { rows: Vec<Value> },
}

impl RowsResponse {
    fn into_rows(self) -> Vec<Value> {
        match self {
            RowsResponse::Bare(rows) => rows,
            RowsResponse::Wrapped { rows } => rows,
        }
    }
}

#[derive(Debug, Serialize)]
struct WritePayload {
    sheet: SheetName,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<&'static str>,
    #[serde(flatten)]
    fields: Map<String, Value>,
}
