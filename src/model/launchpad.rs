use serde::{Deserialize, Serialize};

/// Launchpad details, fetched on demand when a launch referencing it is shown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LaunchpadDto {
    pub id: String,
    pub name: String,
    pub full_name: String,
    pub status: String,
    pub locality: String,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
    pub launch_attempts: u32,
    pub launch_successes: u32,
    /// Ids of rockets that launch from this pad
    #[serde(default)]
    pub rockets: Vec<String>,
    pub timezone: String,
    pub details: Option<String>,
    #[serde(default)]
    pub images: LaunchpadImagesDto,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LaunchpadImagesDto {
    #[serde(default)]
    pub large: Vec<String>,
}
