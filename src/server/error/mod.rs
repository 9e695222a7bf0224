//! Error types for the Starlog server application.
//!
//! Domain-specific error enums (authentication, configuration, catalog
//! fetching) are aggregated into a single [`Error`] type. All errors
//! implement `IntoResponse` for Axum and use `thiserror` for `Display` and
//! `Error` derivations.

pub mod auth;
pub mod config;
pub mod fetch;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, fetch::FetchError},
};

/// Main error type for the Starlog server application.
///
/// Aggregates the domain-specific error types via `thiserror`'s `#[from]`
/// so handlers can use `?` throughout. The `IntoResponse` implementation
/// delegates to each domain's HTTP mapping.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variable value).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (bad credentials, missing session flag).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Catalog fetch error surfaced directly by the SpaceX client.
    #[error(transparent)]
    FetchError(#[from] FetchError),
    /// Catalog fetch error shared out of the query cache.
    ///
    /// Cached outcomes are handed to every waiter of a key, so the cache
    /// stores failures behind an `Arc`.
    #[error(transparent)]
    SharedFetchError(#[from] Arc<FetchError>),
    /// Failed to construct the underlying HTTP client.
    #[error(transparent)]
    HttpClientError(#[from] reqwest::Error),
    /// Session error (retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::FetchError(err) => err.into_response(),
            Self::SharedFetchError(err) => err.to_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error for debugging but returns a generic message to the
/// client so internal details are not exposed.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
