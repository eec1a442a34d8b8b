//! Classification of raw responses into files, JSON or errors.

use log::{debug, error};
use serde_json::Value;

use super::error::{ApiError, Result};
use crate::model::generation::DownloadHandle;
use crate::requests::RawResponse;

/// How a successful response body should be treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Json,
    File,
}

impl ContentKind {
    /// Classifies a success body given what the endpoint normally returns.
    ///
    /// Data endpoints (`expected == Json`) treat JSON MIME types and a missing
    /// type as structured data; an `attachment` disposition or any other type
    /// is a file. File endpoints (`expected == File`) treat every body as a
    /// file unless it is JSON explicitly marked `inline`. Cross-origin
    /// responses do not expose `Content-Disposition` at all.
    pub fn classify(
        content_type: Option<&str>,
        content_disposition: Option<&str>,
        expected: ContentKind,
    ) -> Self {
        let json_mime = match content_type.map(mime_essence) {
            None => true,
            Some(mime) => mime.is_empty() || is_json_mime(&mime),
        };
        let marked = |kind: &str| content_disposition.is_some_and(|d| disposition_is(d, kind));
        match expected {
            ContentKind::Json if json_mime && !marked("attachment") => ContentKind::Json,
            ContentKind::File if json_mime && marked("inline") => ContentKind::Json,
            _ => ContentKind::File,
        }
    }
}

/// A successful, classified response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    File(DownloadHandle),
}

/// Turns a raw response into a [`ResponseBody`] or the matching [`ApiError`].
pub fn normalize(response: RawResponse, expected: ContentKind) -> Result<ResponseBody> {
    if !response.is_success() {
        return Err(server_error(response.status, &response.body));
    }

    let kind = ContentKind::classify(
        response.content_type.as_deref(),
        response.content_disposition.as_deref(),
        expected,
    );
    debug!(
        "{} response, {} bytes, treated as {:?}",
        response.status,
        response.body.len(),
        kind
    );

    match kind {
        ContentKind::File => {
            let filename = response
                .content_disposition
                .as_deref()
                .and_then(disposition_filename);
            let content_type = response
                .content_type
                .unwrap_or_else(|| "application/octet-stream".to_string());
            Ok(ResponseBody::File(DownloadHandle::new(
                response.body,
                content_type,
                filename,
            )))
        }
        ContentKind::Json => {
            if response.body.iter().all(u8::is_ascii_whitespace) {
                return Ok(ResponseBody::Json(Value::Null));
            }
            serde_json::from_slice(&response.body)
                .map(ResponseBody::Json)
                .map_err(|err| {
                    error!(
                        "could not parse {} byte response body: {err}",
                        response.body.len()
                    );
                    ApiError::Parse(err.to_string())
                })
        }
    }
}

/// Builds the error for a non-success status.
///
/// FastAPI reports `{"detail": "..."}`, or a list of `{"msg": ...}` entries
/// for request validation failures. Anything else falls back to the status.
fn server_error(status: u16, body: &[u8]) -> ApiError {
    let detail = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| value.get("detail").and_then(detail_message));
    let message = detail.unwrap_or_else(|| format!("HTTP error! status: {status}"));
    ApiError::Server { status, message }
}

fn detail_message(detail: &Value) -> Option<String> {
    match detail {
        Value::String(message) if !message.is_empty() => Some(message.clone()),
        Value::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

fn mime_essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

fn is_json_mime(mime: &str) -> bool {
    mime == "application/json" || mime.ends_with("+json")
}

fn disposition_is(disposition: &str, kind: &str) -> bool {
    disposition
        .split(';')
        .next()
        .is_some_and(|value| value.trim().eq_ignore_ascii_case(kind))
}

/// Extracts the filename from a `Content-Disposition` value, preferring the
/// RFC 5987 `filename*` form.
pub fn disposition_filename(disposition: &str) -> Option<String> {
    let params: Vec<(&str, &str)> = disposition
        .split(';')
        .skip(1)
        .filter_map(|param| param.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .collect();

    let extended = params
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("filename*"))
        .and_then(|(_, value)| value.split_once("''"))
        .and_then(|(_, encoded)| percent_decode(encoded));
    let plain = || {
        params
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case("filename"))
            .map(|(_, value)| value.trim_matches('"').to_string())
    };

    extended.or_else(plain).filter(|name| !name.is_empty())
}

fn percent_decode(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = input.get(i + 1..i + 3)?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use ContentKind::{File, Json};

    fn response(status: u16, content_type: Option<&str>, body: &[u8]) -> RawResponse {
        RawResponse {
            status,
            content_type: content_type.map(str::to_string),
            content_disposition: None,
            body: body.to_vec(),
        }
    }

    fn download(body: ResponseBody) -> DownloadHandle {
        match body {
            ResponseBody::File(handle) => handle,
            ResponseBody::Json(value) => panic!("expected a file, got {value}"),
        }
    }

    #[test]
    fn classify_for_data_endpoints() {
        assert_eq!(ContentKind::classify(Some("text/csv; charset=utf-8"), None, Json), File);
        assert_eq!(ContentKind::classify(Some("application/octet-stream"), None, Json), File);
        assert_eq!(ContentKind::classify(Some("application/json"), None, Json), Json);
        assert_eq!(ContentKind::classify(Some("application/problem+json"), None, Json), Json);
        assert_eq!(ContentKind::classify(None, None, Json), Json);
        assert_eq!(
            ContentKind::classify(
                Some("application/json"),
                Some("attachment; filename=\"qa_pairs.json\""),
                Json
            ),
            File
        );
        assert_eq!(ContentKind::classify(Some("application/json"), Some("inline"), Json), Json);
    }

    #[test]
    fn classify_for_file_endpoints() {
        assert_eq!(ContentKind::classify(Some("application/json"), None, File), File);
        assert_eq!(ContentKind::classify(None, None, File), File);
        assert_eq!(ContentKind::classify(Some("text/csv"), None, File), File);
        assert_eq!(ContentKind::classify(Some("application/json"), Some("inline"), File), Json);
        assert_eq!(ContentKind::classify(Some("text/csv"), Some("inline"), File), File);
    }

    #[test]
    fn json_without_disposition_is_a_download_for_file_endpoints() {
        let raw = response(200, Some("application/json"), br#"[{"question":"Q","answer":"A"}]"#);
        let handle = download(normalize(raw, File).unwrap());
        assert_eq!(handle.content_type(), "application/json");
        assert_eq!(handle.filename(), None);
        assert_eq!(handle.text(), Some(r#"[{"question":"Q","answer":"A"}]"#));
    }

    #[test]
    fn detail_string_is_surfaced() {
        let raw = response(500, Some("application/json"), br#"{"detail": "model offline"}"#);
        let err = normalize(raw, Json).unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                message: "model offline".into()
            }
        );
    }

    #[test]
    fn errors_are_read_before_classification() {
        let raw = response(400, Some("application/json"), br#"{"detail": "bad domain"}"#);
        assert_eq!(normalize(raw, File).unwrap_err().user_message(), "bad domain");
    }

    #[test]
    fn validation_detail_list_is_joined() {
        let body = json!({"detail": [
            {
                "loc": ["body", "num_rows"],
                "msg": "Number of rows must be between 1 and 1000",
                "type": "value_error"
            },
            {"loc": ["body", "use_case"], "msg": "field required", "type": "missing"}
        ]});
        let raw = response(422, Some("application/json"), body.to_string().as_bytes());
        let err = normalize(raw, Json).unwrap_err();
        assert_eq!(
            err.user_message(),
            "Number of rows must be between 1 and 1000; field required"
        );
    }

    #[test]
    fn missing_detail_falls_back_to_status() {
        let raw = response(502, Some("text/html"), b"<html>Bad gateway</html>");
        let err = normalize(raw, Json).unwrap_err();
        assert_eq!(err.user_message(), "HTTP error! status: 502");
        let raw = response(404, Some("application/json"), br#"{"error": "nope"}"#);
        let err = normalize(raw, Json).unwrap_err();
        assert_eq!(err.user_message(), "HTTP error! status: 404");
    }

    #[test]
    fn csv_becomes_download_with_filename() {
        let mut raw = response(200, Some("text/csv; charset=utf-8"), b"id,email\n1,a@b.c\n");
        raw.content_disposition = Some("attachment; filename=\"tabular_dataset.csv\"".into());
        let handle = download(normalize(raw, Json).unwrap());
        assert_eq!(handle.filename(), Some("tabular_dataset.csv"));
        assert_eq!(handle.content_type(), "text/csv; charset=utf-8");
        assert_eq!(handle.text(), Some("id,email\n1,a@b.c\n"));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let raw = response(200, Some("application/json"), b"{not json");
        let err = normalize(raw, Json).unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn empty_json_body_is_null() {
        let body = normalize(response(204, None, b""), Json).unwrap();
        assert_eq!(body, ResponseBody::Json(Value::Null));
    }

    #[test]
    fn extended_filename_wins() {
        let disposition =
            "attachment; filename=\"plain.csv\"; filename*=utf-8''r%C3%A9sum%C3%A9.csv";
        assert_eq!(disposition_filename(disposition).as_deref(), Some("résumé.csv"));
        assert_eq!(
            disposition_filename("attachment; filename=data.json").as_deref(),
            Some("data.json")
        );
        assert_eq!(disposition_filename("attachment"), None);
    }
}
