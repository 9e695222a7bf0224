use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Rocket details, fetched on demand when a launch referencing it is shown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RocketDto {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub rocket_type: String,
    pub active: bool,
    pub stages: u32,
    pub boosters: u32,
    pub cost_per_launch: u64,
    pub success_rate_pct: f64,
    pub first_flight: NaiveDate,
    pub country: String,
    pub company: String,
    pub height: DimensionDto,
    pub diameter: DimensionDto,
    pub mass: MassDto,
    #[serde(default)]
    pub flickr_images: Vec<String>,
    pub wikipedia: Option<String>,
    pub description: Option<String>,
}

/// A physical dimension in both unit systems.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DimensionDto {
    pub meters: Option<f64>,
    pub feet: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MassDto {
    pub kg: u64,
    pub lb: u64,
}
