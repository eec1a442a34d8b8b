//! First rows of a generated dataset, for the preview sheet.
//!
//! CSV files are read with the `csv` crate. JSON files are expected to be
//! either a top-level array of records or the versioned envelope
//! `{"schema_version": 1, "records": [...]}`. Older backends return other
//! objects; for those the first array-valued field is used as the records,
//! which is a guess and is logged as such.

use log::warn;
use serde_json::Value;
use thiserror::Error;

use crate::model::generation::DownloadHandle;

pub const PREVIEW_ROWS: usize = 5;
pub const SUPPORTED_SCHEMA_VERSION: u64 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    #[error("The file is not valid UTF-8.")]
    NotText,
    #[error("Could not read CSV: {0}")]
    Csv(String),
    #[error("Could not read JSON: {0}")]
    Json(String),
    #[error("Unsupported dataset schema version {0}.")]
    UnsupportedVersion(u64),
    #[error("The file contains no records to preview.")]
    NoRecords,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DatasetPreview {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Total number of records in the file, not just the previewed ones.
    pub total_rows: usize,
}

impl DatasetPreview {
    pub fn from_download(handle: &DownloadHandle) -> Result<Self, PreviewError> {
        let text = handle.text().ok_or(PreviewError::NotText)?;
        let is_csv = handle.content_type().contains("csv")
            || handle.filename().is_some_and(|name| name.ends_with(".csv"));
        if is_csv {
            Self::from_csv(text)
        } else {
            Self::from_json(text)
        }
    }

    pub fn from_csv(text: &str) -> Result<Self, PreviewError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());
        let headers = reader
            .headers()
            .map_err(|err| PreviewError::Csv(err.to_string()))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        let mut total_rows = 0;
        for record in reader.records() {
            let record = record.map_err(|err| PreviewError::Csv(err.to_string()))?;
            if rows.len() < PREVIEW_ROWS {
                rows.push(record.iter().map(str::to_string).collect());
            }
            total_rows += 1;
        }
        Ok(Self {
            headers,
            rows,
            total_rows,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, PreviewError> {
        let value: Value =
            serde_json::from_str(text).map_err(|err| PreviewError::Json(err.to_string()))?;
        let records = records_of(&value)?;
        Ok(Self::from_records(records))
    }

    fn from_records(records: &[Value]) -> Self {
        let mut headers: Vec<String> = Vec::new();
        for record in records.iter().take(PREVIEW_ROWS) {
            match record {
                Value::Object(map) => {
                    for key in map.keys() {
                        if !headers.iter().any(|h| h == key) {
                            headers.push(key.clone());
                        }
                    }
                }
                _ if headers.is_empty() => headers.push("value".to_string()),
                _ => {}
            }
        }

        let rows = records
            .iter()
            .take(PREVIEW_ROWS)
            .map(|record| match record {
                Value::Object(map) => headers
                    .iter()
                    .map(|h| map.get(h).map(cell_text).unwrap_or_default())
                    .collect(),
                other => vec![cell_text(other)],
            })
            .collect();

        Self {
            headers,
            rows,
            total_rows: records.len(),
        }
    }
}

fn records_of(value: &Value) -> Result<&[Value], PreviewError> {
    match value {
        Value::Array(records) => Ok(records.as_slice()),
        Value::Object(map) => {
            if let Some(version) = map.get("schema_version") {
                let version = version.as_u64().unwrap_or_default();
                if version != SUPPORTED_SCHEMA_VERSION {
                    return Err(PreviewError::UnsupportedVersion(version));
                }
                return map
                    .get("records")
                    .and_then(Value::as_array)
                    .map(Vec::as_slice)
                    .ok_or(PreviewError::NoRecords);
            }
            let (field, records) = map
                .iter()
                .find_map(|(key, v)| v.as_array().map(|records| (key, records)))
                .ok_or(PreviewError::NoRecords)?;
            warn!("dataset has no schema_version, previewing first array field `{field}`");
            Ok(records.as_slice())
        }
        _ => Err(PreviewError::NoRecords),
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
