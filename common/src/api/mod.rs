//! Request/response normalizer for the generation backend.
//!
//! [`ApiClient`] turns every outbound call into either a typed value or an
//! [`ApiError`]. File responses (CSV or JSON attachments) come back as a
//! [`DownloadHandle`](crate::model::generation::DownloadHandle), structured
//! responses as parsed JSON. The network itself sits behind [`Transport`] so
//! the browser and tests can each supply their own.

mod client;
mod config;
mod error;
mod normalize;
mod transport;

pub use client::{ApiClient, HealthStatus};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, PARSE_MESSAGE, Result, TRANSPORT_MESSAGE};
pub use normalize::{ContentKind, ResponseBody, disposition_filename, normalize};
pub use transport::{Transport, TransportError};

pub const TABULAR_ENDPOINT: &str = "/generate/tabular";
pub const QA_ENDPOINT: &str = "/generate/qa";
pub const SUBMIT_FEEDBACK_ENDPOINT: &str = "/submit-feedback";
pub const CONTACT_ENDPOINT: &str = "/feedback";
pub const FEEDBACK_REPORT_ENDPOINT: &str = "/feedback-report";
pub const HEALTH_ENDPOINT: &str = "/health";
