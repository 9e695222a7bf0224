use serde::{Deserialize, Serialize};

/// Credentials submitted by the login form.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// Current authentication state of the caller's session.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SessionDto {
    pub authenticated: bool,
}
