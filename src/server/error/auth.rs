use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Session is not authenticated")]
    NotAuthenticated,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => {
                tracing::debug!("{}", Self::InvalidCredentials);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Invalid username or password".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::NotAuthenticated => {
                tracing::debug!("{}", Self::NotAuthenticated);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Not authenticated".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
