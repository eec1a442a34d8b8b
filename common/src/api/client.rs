use log::{debug, error, info};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::config::ClientConfig;
use super::error::{ApiError, Result};
use super::normalize::{ContentKind, ResponseBody, normalize};
use super::transport::Transport;
use super::{
    CONTACT_ENDPOINT, FEEDBACK_REPORT_ENDPOINT, HEALTH_ENDPOINT, QA_ENDPOINT,
    SUBMIT_FEEDBACK_ENDPOINT, TABULAR_ENDPOINT,
};
use crate::model::feedback::{ContactMessage, FeedbackReport, FeedbackStatus, FeedbackSubmission};
use crate::model::generation::GenerationResult;
use crate::model::qa::QaRequest;
use crate::model::tabular::TabularRequest;
use crate::requests::{ApiRequest, Method};

/// `GET /health` response. Only `status` is relied upon.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(flatten)]
    pub details: serde_json::Map<String, Value>,
}

impl HealthStatus {
    /// `"healthy"` (any case) or `"ok"`.
    pub fn is_online(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy") || self.status == "ok"
    }
}

/// Client for the generation backend.
///
/// Calls are issued once: no retries, no caching, no client-side timeout.
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
    config: ClientConfig,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Result<Self> {
        config.validate()?;
        Ok(Self { transport, config })
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Issues one call and classifies whatever comes back, `expected` being
    /// what the endpoint normally returns.
    pub async fn send<B>(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&B>,
        expected: ContentKind,
    ) -> Result<ResponseBody>
    where
        B: Serialize + ?Sized,
    {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|err| ApiError::Encode(err.to_string()))?;
        let request = ApiRequest::json(method, self.config.endpoint_url(endpoint), body);
        debug!("{} {}", request.method, request.url);

        let response = self.transport.send(request).await.map_err(|err| {
            error!("{method} {endpoint} failed before a response arrived: {err}");
            ApiError::Transport(err.message)
        })?;
        normalize(response, expected)
    }

    /// Like [`Self::send`], but expects structured data of type `R`.
    pub async fn request_json<B, R>(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&B>,
    ) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        match self.send(endpoint, method, body, ContentKind::Json).await? {
            ResponseBody::Json(value) => serde_json::from_value(value).map_err(|err| {
                error!("{endpoint} returned JSON of an unexpected shape: {err}");
                ApiError::Parse(err.to_string())
            }),
            ResponseBody::File(handle) => {
                error!(
                    "{endpoint} returned a {} file where JSON was expected",
                    handle.content_type()
                );
                Err(ApiError::Parse(format!("expected JSON, got {}", handle.content_type())))
            }
        }
    }

    /// `POST /generate/tabular`. Unnamed columns are rejected without a call.
    ///
    /// Any success body is a file, including JSON; only JSON marked `inline`
    /// comes back as [`GenerationResult::Payload`].
    pub async fn generate_tabular(&self, request: &TabularRequest) -> GenerationResult {
        if let Err(err) = request.validate() {
            return GenerationResult::Failed(ApiError::from(err).user_message());
        }
        let result = self
            .send(TABULAR_ENDPOINT, Method::Post, Some(request), ContentKind::File)
            .await;
        into_generation(TABULAR_ENDPOINT, result)
    }

    /// `POST /generate/qa`.
    pub async fn generate_qa(&self, request: &QaRequest) -> GenerationResult {
        let result = self
            .send(QA_ENDPOINT, Method::Post, Some(request), ContentKind::File)
            .await;
        into_generation(QA_ENDPOINT, result)
    }

    pub async fn submit_feedback(&self, submission: &FeedbackSubmission) -> Result<FeedbackStatus> {
        self.request_json(SUBMIT_FEEDBACK_ENDPOINT, Method::Post, Some(submission))
            .await
    }

    pub async fn submit_contact(&self, message: &ContactMessage) -> Result<FeedbackStatus> {
        message.validate()?;
        self.request_json(CONTACT_ENDPOINT, Method::Post, Some(message)).await
    }

    pub async fn feedback_report(&self) -> Result<FeedbackReport> {
        self.request_json(FEEDBACK_REPORT_ENDPOINT, Method::Get, None::<&()>)
            .await
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        self.request_json(HEALTH_ENDPOINT, Method::Get, None::<&()>).await
    }
}

fn into_generation(endpoint: &str, result: Result<ResponseBody>) -> GenerationResult {
    match result {
        Ok(ResponseBody::File(handle)) => {
            info!("{endpoint} produced a {} byte file", handle.len());
            GenerationResult::Download(handle)
        }
        Ok(ResponseBody::Json(value)) => GenerationResult::Payload(value),
        Err(err) => {
            info!("{endpoint} failed: {err}");
            GenerationResult::Failed(err.user_message())
        }
    }
}
