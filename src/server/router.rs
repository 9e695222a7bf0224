//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications
//! via utoipa, and Swagger UI serves the interactive documentation at
//! `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger
/// UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/login` - Log in with the demo credentials
/// - `GET /api/auth/logout` - Clear the session
/// - `GET /api/auth/session` - Read the session's authentication state
/// - `GET /api/launches` - Full launch collection
/// - `GET /api/launches/{launch_id}` - One launch
/// - `GET /api/rockets/{rocket_id}` - One rocket
/// - `GET /api/launchpads/{launchpad_id}` - One launchpad
///
/// # Returns
/// An Axum `Router<AppState>` ready to be merged into the main application
/// router.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Starlog", description = "Starlog API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::launches::LAUNCHES_TAG, description = "Launch catalog API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_session))
        .routes(routes!(controller::launches::list_launches))
        .routes(routes!(controller::launches::get_launch))
        .routes(routes!(controller::launches::get_rocket))
        .routes(routes!(controller::launches::get_launchpad))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
