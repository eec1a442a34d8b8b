use std::future::Future;

use thiserror::Error;

use crate::requests::{ApiRequest, RawResponse};

/// The call never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Performs one network round trip.
///
/// Implementations must only report a [`TransportError`] when no response
/// was received at all; any status code, including errors, is a response.
pub trait Transport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<RawResponse, TransportError>>;
}
