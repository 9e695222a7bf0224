use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, SessionDto},
    },
    server::{error::Error, model::session::auth::SessionAuthenticated, service::auth::login_service},
};

pub static AUTH_TAG: &str = "auth";

/// Log in with the fixed demo credentials
///
/// Checks the submitted pair against the configured demo credentials and, on
/// success, marks the caller's session as authenticated. A failed attempt
/// leaves the session unchanged.
///
/// # Responses
/// - 200 (OK): Credentials matched, session flag set
/// - 401 (Unauthorized): Credentials did not match the fixed pair
/// - 500 (Internal Server Error): Session storage failed
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = SessionDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(session: Session, Json(body): Json<LoginDto>) -> Result<impl IntoResponse, Error> {
    login_service(&body.username, &body.password)?;

    SessionAuthenticated::insert(&session, true).await?;

    Ok((
        StatusCode::OK,
        Json(SessionDto {
            authenticated: true,
        }),
    ))
}

/// Log out by clearing the session
///
/// # Responses
/// - 307 (Temporary Redirect): Successfully logged out, redirect to the login page
/// - 500 (Internal Server Error): There was an issue reading the session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Successfully logged out, redirected to login"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let authenticated = SessionAuthenticated::get(&session).await?;

    // Only clear the session when there is something in it; clearing an
    // empty session produces a 500 from the session layer.
    if authenticated {
        session.clear().await;
    }

    Ok(Redirect::temporary("/login"))
}

/// Get the authentication state of the current session
///
/// The browser client calls this on startup to rehydrate its auth store,
/// which is what makes a login survive page reloads.
///
/// # Responses
/// - 200 (OK): Current authentication state
/// - 500 (Internal Server Error): There was an issue reading the session
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current session state", body = SessionDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session(session: Session) -> Result<impl IntoResponse, Error> {
    let authenticated = SessionAuthenticated::get(&session).await?;

    Ok((StatusCode::OK, Json(SessionDto { authenticated })))
}
