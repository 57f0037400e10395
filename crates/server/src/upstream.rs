//! Client for the remote practitioner feed.

use serde_json::Value as JsonValue;
use thiserror::Error;

/// Failures of the one-shot upstream fetch
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(reqwest::StatusCode),
}

/// HTTP client for the raw record feed
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    url: String,
}

impl UpstreamClient {
    /// Create a new client for the given feed URL
    pub fn new(url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            url,
        }
    }

    /// Fetch the raw record array. One shot: no retry, no cancellation.
    ///
    /// A payload that is valid JSON but not an array degrades to an empty
    /// feed rather than an error, matching how the rest of the pipeline
    /// absorbs malformed data.
    pub async fn fetch_records(&self) -> Result<Vec<JsonValue>, UpstreamError> {
        let response = self.http.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status()));
        }

        let body: JsonValue = response.json().await?;
        match body {
            JsonValue::Array(records) => Ok(records),
            other => {
                tracing::warn!(got = %value_kind(&other), "upstream payload is not an array");
                Ok(Vec::new())
            }
        }
    }
}

fn value_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
