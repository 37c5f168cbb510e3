use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Sheets v4 `ValueRange`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<String>,
    #[serde(default)]
    pub values: Vec<Vec<serde_json::Value>>,
}

impl ValueRange {
    pub fn rows(range: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            range: Some(range.into()),
            major_dimension: None,
            values: rows
                .into_iter()
                .map(|r| r.into_iter().map(serde_json::Value::String).collect())
                .collect(),
        }
    }

    /// Cell values rendered as text; numbers and booleans are stringified.
    pub fn string_rows(&self) -> Vec<Vec<String>> {
        self.values
            .iter()
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect()
    }
}

fn cell_to_string(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Body of `spreadsheets.values.batchUpdate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateValuesRequest {
    pub value_input_option: String,
    pub data: Vec<ValueRange>,
}

/// The two spreadsheet calls the writer needs.
#[allow(async_fn_in_trait)]
pub trait SheetsBackend {
    async fn get_values(&self, spreadsheet_id: &str, range: &str) -> Result<Vec<Vec<String>>>;

    async fn batch_update(
        &self,
        spreadsheet_id: &str,
        request: &BatchUpdateValuesRequest,
    ) -> Result<()>;
}
