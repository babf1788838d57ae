use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row as returned by the web app: a flat JSON object whose keys are the
/// sheet's column headers. Header names differ between sheets and between
/// historical versions of the same sheet, so lookups go through
/// [`RawRow::first`] with a list of candidate keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRow(Map<String, Value>);

impl RawRow {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Value of the first key in `keys` that is present and not null or an
    /// empty string.
    pub fn first(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter()
            .filter_map(|key| self.0.get(*key))
            .find(|value| match value {
                Value::Null => false,
                Value::String(s) => !s.trim().is_empty(),
                _ => true,
            })
    }

    /// Like [`RawRow::first`] but renders the value as trimmed text. Numbers
    /// and booleans are rendered with their JSON representation.
    pub fn first_text(&self, keys: &[&str]) -> Option<String> {
        self.first(keys).and_then(|value| match value {
            Value::String(s) => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
    }

    /// Like [`RawRow::first`] but parses the value as a number. Numeric
    /// strings are accepted (spreadsheet cells often come back as text);
    /// a decimal comma is treated as a decimal point.
    pub fn first_number(&self, keys: &[&str]) -> Option<f64> {
        keys.iter()
            .filter_map(|key| self.0.get(*key))
            .find_map(|value| match value {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().replace(',', ".").parse::<f64>().ok(),
                _ => None,
            })
            .filter(|n| n.is_finite())
    }
}

impl From<Map<String, Value>> for RawRow {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
