use serde::{Deserialize, Serialize};

/// Body returned by API routes when a request fails
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// Human-readable error message, shown verbatim by the client
    pub error: String,
}
