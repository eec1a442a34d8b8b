use std::cell::RefCell;
use std::collections::VecDeque;

use common::api::{ApiClient, ClientConfig, Transport, TransportError};
use common::requests::{ApiRequest, RawResponse};

pub const BASE_URL: &str = "http://api.test";

/// Replays scripted responses in order and records every request it sees.
#[derive(Default)]
pub struct MockTransport {
    script: RefCell<VecDeque<Result<RawResponse, TransportError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn respond(self, response: RawResponse) -> Self {
        self.script.borrow_mut().push_back(Ok(response));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.script.borrow_mut().push_back(Err(TransportError::new(message)));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no scripted response")))
    }
}

pub fn client(transport: MockTransport) -> ApiClient<MockTransport> {
    ApiClient::new(ClientConfig::new(BASE_URL), transport).unwrap()
}

pub fn json(status: u16, body: &str) -> RawResponse {
    RawResponse {
        status,
        content_type: Some("application/json".into()),
        content_disposition: None,
        body: body.as_bytes().to_vec(),
    }
}

pub fn file(content_type: &str, disposition: Option<&str>, body: &str) -> RawResponse {
    RawResponse {
        status: 200,
        content_type: Some(content_type.into()),
        content_disposition: disposition.map(str::to_string),
        body: body.as_bytes().to_vec(),
    }
}

pub trait WithStatus {
    fn with_status(self, status: u16) -> Self;
}

impl WithStatus for RawResponse {
    fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }
}
