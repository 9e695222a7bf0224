use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failure while fetching a resource from the remote catalog.
///
/// A single attempt is made per invocation; the query cache decides whether
/// to retry. All three variants surface to the client as a 502 whose message
/// text is shown verbatim in the UI.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Upstream returned a non-2xx status.
    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },
    /// Transport-level failure (DNS, connect, timeout, body read).
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The response body was not the expected JSON shape.
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Builds the HTTP response for this error without consuming it, so the
    /// same cached failure can answer every waiter of a cache key.
    pub fn to_response(&self) -> Response {
        tracing::warn!("{}", self);

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for FetchError {
    fn into_response(self) -> Response {
        self.to_response()
    }
}
