use std::env;

use url::Url;

use crate::{domain::SheetName, SheetsError};

/// Base URL of the spreadsheet web app, e.g.
/// `https://script.google.com/macros/s/<deployment>/exec`.
#[derive(Debug, Clone)]
pub struct SheetsURL(String);

impl AsRef<str> for SheetsURL {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SheetsURL {
    /// Parses and validates a base URL. Only `http` and `https` are accepted.
    pub fn new(base: impl AsRef<str>) -> Result<Self, SheetsError> {
        let parsed = Url::parse(base.as_ref())
            .map_err(|e| SheetsError::InvalidUrl(format!("{}: {}", base.as_ref(), e)))?;

        match parsed.scheme() {
            "http" | "https" => Ok(Self(parsed.to_string())),
            other => Err(SheetsError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                other
            ))),
        }
    }

    /// Creates a SheetsURL from the environment variable `SHEETS_URL`.
    pub fn from_env() -> Result<Self, SheetsError> {
        let base = env::var("SHEETS_URL")
            .map_err(|_| SheetsError::InvalidUrl("SHEETS_URL must be set in env".to_string()))?;
        Self::new(base)
    }

    /// Append the `sheet` query parameter selecting which sheet to read.
    pub fn with_sheet(&self, sheet: SheetName) -> Self {
        let base = self.0.trim_end_matches('?');
        if base.contains('?') {
            Self(format!("{}&sheet={}", base, sheet.as_str()))
        } else {
            Self(format!("{}?sheet={}", base, sheet.as_str()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_sheet_as_first_query_parameter() {
        let url = SheetsURL::new("https://script.example.com/macros/s/abc/exec").unwrap();
        assert_eq!(
            url.with_sheet(SheetName::Pave).as_ref(),
            "https://script.example.com/macros/s/abc/exec?sheet=Pave_Form"
        );
    }

    #[test]
    fn appends_sheet_to_existing_query() {
        let url = SheetsURL::new("https://script.example.com/exec?key=1").unwrap();
        assert_eq!(
            url.with_sheet(SheetName::All).as_ref(),
            "https://script.example.com/exec?key=1&sheet=All"
        );
    }

    #[test]
    fn rejects_non_http_schemes() {
        assert!(matches!(
            SheetsURL::new("ftp://example.com/exec"),
            Err(SheetsError::InvalidUrl(_))
        ));
        assert!(SheetsURL::new("not a url").is_err());
    }
}
