use thiserror::Error;

use crate::model::ModelError;

pub type Result<T> = std::result::Result<T, ApiError>;

pub const TRANSPORT_MESSAGE: &str =
    "Unable to reach the generation service. Check your connection and try again.";
pub const PARSE_MESSAGE: &str = "Unexpected response from the generation service.";

/// Every way a backend call can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Input rejected before any request was sent.
    #[error("{0}")]
    Validation(String),
    /// No response arrived (connection refused, DNS, CORS, ...).
    #[error("Network request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The response body was not in the expected shape.
    #[error("Malformed response body: {0}")]
    Parse(String),
    #[error("Could not encode request body: {0}")]
    Encode(String),
    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Text shown to the user in a toast.
    ///
    /// Validation and server messages are shown verbatim; transport and
    /// parse failures get a generic message, their cause goes to the log.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation(message) | ApiError::Server { message, .. } => message.clone(),
            ApiError::Transport(_) => TRANSPORT_MESSAGE.to_string(),
            ApiError::Parse(_) | ApiError::Encode(_) => PARSE_MESSAGE.to_string(),
            ApiError::Config(message) => message.clone(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<ModelError> for ApiError {
    fn from(err: ModelError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_follow_taxonomy() {
        let server = ApiError::Server {
            status: 422,
            message: "num_rows too large".into(),
        };
        assert_eq!(server.user_message(), "num_rows too large");
        assert_eq!(server.status(), Some(422));
        assert_eq!(
            ApiError::Transport("connection refused".into()).user_message(),
            TRANSPORT_MESSAGE
        );
        assert_eq!(ApiError::Parse("eof".into()).user_message(), PARSE_MESSAGE);
        assert_eq!(
            ApiError::from(ModelError::UnnamedColumn { position: 0 }).user_message(),
            "Please fill in all column names before generating data."
        );
    }
}
