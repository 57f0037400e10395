use serde::{Deserialize, Serialize};

/// Machine-readable category of an error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    BadRequest,
    Throttled,
    Unavailable,
    Internal,
}

/// JSON envelope returned by every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiOutcome {
    pub error: ErrorKind,
    pub message: String,
}

impl ApiOutcome {
    pub fn bad_request(message: &str) -> Self {
        Self {
            error: ErrorKind::BadRequest,
            message: message.to_string(),
        }
    }

    pub fn throttled(message: &str) -> Self {
        Self {
            error: ErrorKind::Throttled,
            message: message.to_string(),
        }
    }

    pub fn unavailable(message: &str) -> Self {
        Self {
            error: ErrorKind::Unavailable,
            message: message.to_string(),
        }
    }

    pub fn internal(message: &str) -> Self {
        Self {
            error: ErrorKind::Internal,
            message: message.to_string(),
        }
    }
}
