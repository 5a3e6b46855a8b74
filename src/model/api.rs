use axum::http::StatusCode;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Uniform error body returned for every non-2xx response.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDto {
    pub error: String,
    pub status_code: u16,
    /// RFC 3339 time at which the error was produced.
    pub timestamp: String,
}

impl ErrorDto {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status_code: status.as_u16(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
