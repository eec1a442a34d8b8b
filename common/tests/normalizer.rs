mod support;

use common::api::{ApiError, PARSE_MESSAGE, Result, TRANSPORT_MESSAGE};
use common::model::feedback::{ContactCategory, ContactMessage, FeedbackSubmission, Rating};
use common::model::generation::GenerationResult;
use common::model::qa::{Domain, QaRequest};
use common::model::tabular::{ColumnDefinition, ColumnType, OutputFormat, TabularRequest};
use common::requests::Method;
use serde_json::{Value, json};

use support::{BASE_URL, MockTransport, WithStatus, client, file, json};

fn user_columns() -> Vec<ColumnDefinition> {
    vec![
        ColumnDefinition::new("User ID", ColumnType::Int, "Unique identifier"),
        ColumnDefinition::new("Email", ColumnType::Str, "Email address"),
    ]
}

fn body_of(request: &common::requests::ApiRequest) -> Value {
    serde_json::from_str(request.body.as_deref().unwrap()).unwrap()
}

#[tokio::test]
async fn tabular_csv_response_becomes_download() {
    let api = client(MockTransport::default().respond(file(
        "text/csv",
        Some("attachment; filename=\"dataset.csv\""),
        "User ID,Email\n1,a@x.com\n",
    )));
    let request = TabularRequest::new(user_columns(), 100, "Customer analytics", OutputFormat::Csv);

    let result = api.generate_tabular(&request).await;

    let handle = result.response().download.unwrap();
    assert_eq!(handle.content_type(), "text/csv");
    assert_eq!(handle.filename(), Some("dataset.csv"));
    assert_eq!(handle.text(), Some("User ID,Email\n1,a@x.com\n"));

    let sent = api.transport().requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].url, format!("{BASE_URL}/generate/tabular"));
    assert_eq!(sent[0].header("content-type"), Some("application/json"));
    assert_eq!(
        body_of(&sent[0]),
        json!({
            "columns": [
                {"name": "User ID", "dtype": "int", "description": "Unique identifier"},
                {"name": "Email", "dtype": "str", "description": "Email address"}
            ],
            "num_rows": 100,
            "description": "Generated dataset with 100 rows",
            "use_case": "Customer analytics",
            "output_format": "csv"
        })
    );
}

#[tokio::test]
async fn unnamed_column_never_reaches_the_network() {
    let api = client(MockTransport::default());
    let mut columns = user_columns();
    columns.push(ColumnDefinition::new("   ", ColumnType::Bool, ""));
    let request = TabularRequest::new(columns, 5, "", OutputFormat::Json);

    let result = api.generate_tabular(&request).await;

    assert_eq!(
        result.response().error.as_deref(),
        Some("Please fill in all column names before generating data.")
    );
    assert!(api.transport().requests().is_empty());
}

#[tokio::test]
async fn server_detail_is_surfaced_verbatim() {
    let api = client(
        MockTransport::default().respond(json(422, r#"{"detail": "Too many rows"}"#)),
    );
    let request = TabularRequest::new(user_columns(), 50, "", OutputFormat::Csv);

    let response = api.generate_tabular(&request).await.response();

    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("Too many rows"));
}

#[tokio::test]
async fn error_without_detail_reports_status() {
    let api = client(
        MockTransport::default()
            .respond(file("text/html", None, "<h1>Bad Gateway</h1>").with_status(502)),
    );
    let request = QaRequest::new(Domain::Finance, 80, 20, "");

    let result = api.generate_qa(&request).await;

    assert_eq!(
        result.response().error.as_deref(),
        Some("HTTP error! status: 502")
    );
}

#[tokio::test]
async fn connection_failure_is_a_failed_result() {
    let api = client(MockTransport::default().fail("connection refused"));
    let request = QaRequest::new(Domain::Healthcare, 50, 50, "diabetes");

    let result = api.generate_qa(&request).await;

    assert_eq!(result, GenerationResult::Failed(TRANSPORT_MESSAGE.to_string()));
}

#[tokio::test]
async fn qa_json_file_is_downloadable_and_body_carries_slider_values() {
    let api = client(MockTransport::default().respond(file(
        "application/json",
        Some("attachment; filename=qa_pairs.json"),
        r#"[{"question": "Q", "answer": "A"}]"#,
    )));
    let request = QaRequest::new(Domain::Education, 10, 120, "  ");

    let result = api.generate_qa(&request).await;

    let response = result.response();
    assert_eq!(response.download.unwrap().filename(), Some("qa_pairs.json"));
    assert_eq!(response.data, None);

    let body = body_of(&api.transport().requests()[0]);
    assert_eq!(body["num_pairs"], json!(120));
    assert_eq!(body["complexity"], json!("beginner"));
    assert_eq!(body["domain"], json!("education"));
    assert!(body.get("context").is_none());
}

#[tokio::test]
async fn qa_json_without_disposition_is_still_a_download() {
    let api = client(
        MockTransport::default().respond(json(200, r#"[{"question": "Q", "answer": "A"}]"#)),
    );
    let request = QaRequest::new(Domain::Business, 50, 10, "");

    let result = api.generate_qa(&request).await;

    let GenerationResult::Download(handle) = &result else {
        panic!("expected a download, got {result:?}");
    };
    assert_eq!(handle.content_type(), "application/json");
    assert_eq!(handle.filename(), None);
    assert_eq!(handle.text(), Some(r#"[{"question": "Q", "answer": "A"}]"#));
    assert_eq!(result.response().data, None);
}

#[tokio::test]
async fn tabular_json_format_without_disposition_is_a_download() {
    let api = client(MockTransport::default().respond(json(200, r#"[{"User ID": 1}]"#)));
    let request = TabularRequest::new(user_columns(), 5, "", OutputFormat::Json);

    let result = api.generate_tabular(&request).await;

    assert!(matches!(result, GenerationResult::Download(_)));
}

#[tokio::test]
async fn inline_json_payload_is_kept_as_data() {
    let api = client(MockTransport::default().respond(file(
        "application/json",
        Some("inline"),
        r#"{"pairs": [], "metadata": {}}"#,
    )));
    let request = QaRequest::new(Domain::Business, 50, 10, "");

    let response = api.generate_qa(&request).await.response();

    assert!(response.success);
    assert_eq!(response.data, Some(json!({"pairs": [], "metadata": {}})));
    assert_eq!(
        response.download.unwrap().content_type(),
        "application/json"
    );
}

#[tokio::test]
async fn malformed_inline_json_is_a_parse_failure() {
    let api = client(MockTransport::default().respond(file(
        "application/json",
        Some("inline"),
        "{not json",
    )));
    let request = QaRequest::new(Domain::Business, 50, 10, "");

    let result = api.generate_qa(&request).await;

    assert_eq!(result.response().error.as_deref(), Some(PARSE_MESSAGE));
}

#[tokio::test]
async fn malformed_report_is_a_parse_failure() {
    let api = client(MockTransport::default().respond(json(200, "{not json")));

    let result = api.feedback_report().await;

    assert!(matches!(result, Err(ApiError::Parse(_))));
}

#[tokio::test]
async fn feedback_submission_posts_rating_and_improvements() {
    let api = client(MockTransport::default().respond(json(200, r#"{"status": "success"}"#)));
    let submission = FeedbackSubmission::new(
        "dataset-1",
        Rating::new(4).unwrap(),
        "Good spread",
        "more columns; fewer nulls",
    );

    let status = api.submit_feedback(&submission).await.unwrap();

    assert_eq!(status.status, "success");
    let sent = api.transport().requests();
    assert_eq!(sent[0].url, format!("{BASE_URL}/submit-feedback"));
    assert_eq!(
        body_of(&sent[0]),
        json!({
            "dataset_id": "dataset-1",
            "rating": 4,
            "comments": "Good spread",
            "improvements": ["more columns", "fewer nulls"]
        })
    );
}

#[tokio::test]
async fn contact_requires_fields_before_sending() {
    let api = client(MockTransport::default());
    let message = ContactMessage::new(
        "Ada",
        "",
        "",
        "",
        Rating::default(),
        ContactCategory::General,
    );

    let result: Result<_> = api.submit_contact(&message).await;

    assert!(matches!(result, Err(ApiError::Validation(_))));
    assert!(api.transport().requests().is_empty());
}

#[tokio::test]
async fn contact_message_posts_to_feedback() {
    let api = client(MockTransport::default().respond(json(200, r#"{"status": "received"}"#)));
    let message = ContactMessage::new(
        "Ada",
        "ada@example.com",
        "Analytical Engines",
        "Hello",
        Rating::new(5).unwrap(),
        ContactCategory::Feature,
    );

    api.submit_contact(&message).await.unwrap();

    let sent = api.transport().requests();
    assert_eq!(sent[0].url, format!("{BASE_URL}/feedback"));
    let body = body_of(&sent[0]);
    assert_eq!(body["category"], json!("feature"));
    assert_eq!(body["source"], json!("web_contact_form"));
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn feedback_report_is_fetched_with_get() {
    let api = client(MockTransport::default().respond(json(
        200,
        r#"{"average_rating": 4.5, "total_submissions": 12, "improvement_suggestions": ["speed"]}"#,
    )));

    let report = api.feedback_report().await.unwrap();

    assert_eq!(report.total_submissions, 12);
    assert_eq!(report.improvement_suggestions, vec!["speed".to_string()]);
    let sent = api.transport().requests();
    assert_eq!(sent[0].method, Method::Get);
    assert!(sent[0].body.is_none());
}

#[tokio::test]
async fn health_expects_json_not_a_file() {
    let api = client(MockTransport::default().respond(file("text/plain", None, "ok")));

    let result = api.health().await;

    assert!(matches!(result, Err(ApiError::Parse(_))));
}

#[tokio::test]
async fn health_status_reports_online() {
    let api = client(
        MockTransport::default()
            .respond(json(200, r#"{"status": "Healthy", "version": "1.2"}"#))
            .respond(json(200, r#"{"status": "degraded"}"#)),
    );

    let first = api.health().await.unwrap();
    let second = api.health().await.unwrap();

    assert!(first.is_online());
    assert_eq!(first.details["version"], json!("1.2"));
    assert!(!second.is_online());
}
