//! Outcome of a generation request as seen by the panels.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// In-memory reference to a file payload returned by the backend.
///
/// The bytes are shared, so cloning the handle into view state or a
/// callback never copies the dataset. Saving goes through the frontend's
/// file-save helper, which turns the handle into a browser object URL only
/// for the duration of the save.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadHandle {
    bytes: Rc<[u8]>,
    content_type: String,
    filename: Option<String>,
}

impl DownloadHandle {
    pub fn new(
        bytes: impl Into<Rc<[u8]>>,
        content_type: impl Into<String>,
        filename: Option<String>,
    ) -> Self {
        Self {
            bytes: bytes.into(),
            content_type: content_type.into(),
            filename,
        }
    }

    /// Wraps an embedded JSON payload so it can be saved like a file.
    pub fn from_json(value: &serde_json::Value, filename: Option<String>) -> Self {
        let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
        Self::new(text.into_bytes(), "application/json", filename)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Name suggested by the server's `Content-Disposition`, if it sent one.
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Name to save under: the server's suggestion, else
    /// `{prefix}_{timestamp_ms}.{extension}`.
    pub fn save_name(&self, prefix: &str, extension: &str, timestamp_ms: u64) -> String {
        match self.filename() {
            Some(name) => name.to_string(),
            None => format!("{prefix}_{timestamp_ms}.{extension}"),
        }
    }

    /// The payload as UTF-8 text, if it is valid UTF-8.
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }
}

/// Result of one submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationResult {
    Download(DownloadHandle),
    Payload(serde_json::Value),
    Failed(String),
}

/// Flat `{success, downloadReference?, error?}` view of a [`GenerationResult`].
///
/// An embedded payload is rendered as a JSON download, so every successful
/// response carries something the user can save.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResponse {
    pub success: bool,
    pub download: Option<DownloadHandle>,
    pub data: Option<serde_json::Value>,
    pub error: Option<String>,
}

impl GenerationResult {
    pub fn response(&self) -> GenerationResponse {
        match self {
            GenerationResult::Download(handle) => GenerationResponse {
                success: true,
                download: Some(handle.clone()),
                data: None,
                error: None,
            },
            GenerationResult::Payload(value) => GenerationResponse {
                success: true,
                download: Some(DownloadHandle::from_json(value, None)),
                data: Some(value.clone()),
                error: None,
            },
            GenerationResult::Failed(message) => GenerationResponse {
                success: false,
                download: None,
                data: None,
                error: Some(message.clone()),
            },
        }
    }

    /// Reads the optional `metadata` block of an embedded payload or of a
    /// JSON file.
    pub fn metadata(&self) -> Option<GenerationMetadata> {
        let block = match self {
            GenerationResult::Payload(value) => value.get("metadata").cloned(),
            GenerationResult::Download(handle) if handle.content_type().contains("json") => {
                serde_json::from_slice::<serde_json::Value>(handle.bytes())
                    .ok()
                    .and_then(|mut value| value.get_mut("metadata").map(serde_json::Value::take))
            }
            _ => None,
        };
        block.and_then(|m| serde_json::from_value(m).ok())
    }
}

/// A settled generation together with the request that produced it.
///
/// Panels describe the outcome from `request`, never from their live form
/// fields, which may have moved on while the call was pending.
#[derive(Debug, Clone, PartialEq)]
pub struct Generation<R> {
    pub request: R,
    pub result: GenerationResult,
}

impl<R> Generation<R> {
    pub fn new(request: R, result: GenerationResult) -> Self {
        Self { request, result }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QualityReport {
    pub completeness: f64,
    pub validity: f64,
    pub specificity: f64,
    pub overall_score: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BusinessValue {
    pub time_savings: f64,
    pub cost_reduction: f64,
    pub roi_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EfficiencyMetrics {
    pub generation_time: f64,
    pub items_per_second: f64,
    pub memory_usage: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SafetyReport {
    pub pii_detected: bool,
    #[serde(default)]
    pub content_flags: Vec<String>,
    pub risk_score: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EthicsReport {
    pub bias_detected: bool,
    pub fairness_score: f64,
    #[serde(default)]
    pub violations: Vec<String>,
}

/// Reports a backend may attach to an embedded generation payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenerationMetadata {
    pub quality_report: Option<QualityReport>,
    pub business_value: Option<BusinessValue>,
    pub efficiency_metrics: Option<EfficiencyMetrics>,
    pub safety_report: Option<SafetyReport>,
    pub ethics_report: Option<EthicsReport>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failed_result_has_no_download() {
        let response = GenerationResult::Failed("boom".into()).response();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("boom"));
        assert!(response.download.is_none());
    }

    #[test]
    fn payload_becomes_json_download() {
        let result = GenerationResult::Payload(json!([{"question": "q", "answer": "a"}]));
        let response = result.response();
        let handle = response.download.unwrap();
        assert_eq!(handle.content_type(), "application/json");
        assert_eq!(handle.filename(), None);
        let parsed: serde_json::Value = serde_json::from_slice(handle.bytes()).unwrap();
        assert_eq!(parsed[0]["answer"], "a");
        assert_eq!(response.data, Some(json!([{"question": "q", "answer": "a"}])));
    }

    #[test]
    fn metadata_is_read_from_payload() {
        let result = GenerationResult::Payload(json!({
            "data": [],
            "metadata": {"quality_report": {
                "completeness": 0.9, "validity": 0.8, "specificity": 0.7, "overall_score": 0.8
            }}
        }));
        let metadata = result.metadata().unwrap();
        assert_eq!(metadata.quality_report.unwrap().validity, 0.8);
        assert!(metadata.safety_report.is_none());
    }

    #[test]
    fn save_name_prefers_server_filename() {
        let named = DownloadHandle::new(Vec::new(), "text/csv", Some("users.csv".into()));
        assert_eq!(named.save_name("tabular_dataset", "csv", 1_700), "users.csv");
        let unnamed = DownloadHandle::new(Vec::new(), "application/json", None);
        assert_eq!(
            unnamed.save_name("qa_pairs_finance", "json", 1_700),
            "qa_pairs_finance_1700.json"
        );
    }

    #[test]
    fn metadata_is_read_from_json_file() {
        let body = json!({"data": [], "metadata": {"safety_report": {
            "pii_detected": false, "risk_score": 0.1
        }}});
        let handle = DownloadHandle::new(body.to_string().into_bytes(), "application/json", None);
        let metadata = GenerationResult::Download(handle).metadata().unwrap();
        assert_eq!(metadata.safety_report.unwrap().risk_score, 0.1);

        let csv = DownloadHandle::new(b"id\n1\n".to_vec(), "text/csv", None);
        assert!(GenerationResult::Download(csv).metadata().is_none());
    }
}
