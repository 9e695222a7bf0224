use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto, launch::LaunchDto, launchpad::LaunchpadDto, rocket::RocketDto,
    },
    server::{
        error::Error,
        model::{app::AppState, session::auth::SessionAuthenticated},
        service::catalog::CatalogService,
    },
};

pub static LAUNCHES_TAG: &str = "launches";

/// Get the full launch collection
///
/// # Responses
/// - 200 (OK): The launch collection
/// - 401 (Unauthorized): Session is not authenticated
/// - 502 (Bad Gateway): The upstream catalog request failed
#[utoipa::path(
    get,
    path = "/api/launches",
    tag = LAUNCHES_TAG,
    responses(
        (status = 200, description = "Success when retrieving launches", body = Vec<LaunchDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 502, description = "Upstream catalog request failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_launches(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    SessionAuthenticated::require(&session).await?;

    let catalog = CatalogService::new(&state.spacex, &state.cache);
    let launches = catalog.list_launches().await?;

    Ok((StatusCode::OK, Json(launches.as_ref().clone())))
}

/// Get one launch by id
///
/// # Responses
/// - 200 (OK): The launch
/// - 401 (Unauthorized): Session is not authenticated
/// - 502 (Bad Gateway): The upstream catalog request failed
#[utoipa::path(
    get,
    path = "/api/launches/{launch_id}",
    tag = LAUNCHES_TAG,
    params(
        ("launch_id" = String, Path, description = "Launch id")
    ),
    responses(
        (status = 200, description = "Success when retrieving the launch", body = LaunchDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 502, description = "Upstream catalog request failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_launch(
    State(state): State<AppState>,
    session: Session,
    Path(launch_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    SessionAuthenticated::require(&session).await?;

    let catalog = CatalogService::new(&state.spacex, &state.cache);
    let launch = catalog.get_launch(&launch_id).await?;

    Ok((StatusCode::OK, Json(launch.as_ref().clone())))
}

/// Get one rocket by id
///
/// # Responses
/// - 200 (OK): The rocket
/// - 401 (Unauthorized): Session is not authenticated
/// - 502 (Bad Gateway): The upstream catalog request failed
#[utoipa::path(
    get,
    path = "/api/rockets/{rocket_id}",
    tag = LAUNCHES_TAG,
    params(
        ("rocket_id" = String, Path, description = "Rocket id")
    ),
    responses(
        (status = 200, description = "Success when retrieving the rocket", body = RocketDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 502, description = "Upstream catalog request failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rocket(
    State(state): State<AppState>,
    session: Session,
    Path(rocket_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    SessionAuthenticated::require(&session).await?;

    let catalog = CatalogService::new(&state.spacex, &state.cache);
    let rocket = catalog.get_rocket(&rocket_id).await?;

    Ok((StatusCode::OK, Json(rocket.as_ref().clone())))
}

/// Get one launchpad by id
///
/// # Responses
/// - 200 (OK): The launchpad
/// - 401 (Unauthorized): Session is not authenticated
/// - 502 (Bad Gateway): The upstream catalog request failed
#[utoipa::path(
    get,
    path = "/api/launchpads/{launchpad_id}",
    tag = LAUNCHES_TAG,
    params(
        ("launchpad_id" = String, Path, description = "Launchpad id")
    ),
    responses(
        (status = 200, description = "Success when retrieving the launchpad", body = LaunchpadDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 502, description = "Upstream catalog request failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_launchpad(
    State(state): State<AppState>,
    session: Session,
    Path(launchpad_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    SessionAuthenticated::require(&session).await?;

    let catalog = CatalogService::new(&state.spacex, &state.cache);
    let launchpad = catalog.get_launchpad(&launchpad_id).await?;

    Ok((StatusCode::OK, Json(launchpad.as_ref().clone())))
}
