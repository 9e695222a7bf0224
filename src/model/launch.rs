use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// A single launch from the remote catalog.
///
/// `rocket` and `launchpad` are opaque ids referencing their own resources;
/// the detail page resolves them with two dependent fetches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LaunchDto {
    pub id: String,
    pub name: String,
    pub flight_number: u32,
    pub date_utc: DateTime<Utc>,
    pub date_local: DateTime<FixedOffset>,
    /// `None` means the outcome is unknown (e.g. upcoming launch).
    pub success: Option<bool>,
    pub details: Option<String>,
    /// Rocket id
    pub rocket: String,
    /// Launchpad id
    pub launchpad: String,
    #[serde(default)]
    pub failures: Vec<FailureDto>,
    pub links: LaunchLinksDto,
}

/// One recorded failure during a launch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FailureDto {
    /// Seconds into flight
    pub time: i64,
    /// Altitude in meters, if the failure happened in the air
    pub altitude: Option<i64>,
    pub reason: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LaunchLinksDto {
    #[serde(default)]
    pub patch: PatchDto,
    #[serde(default)]
    pub reddit: RedditDto,
    #[serde(default)]
    pub flickr: FlickrDto,
    pub presskit: Option<String>,
    pub webcast: Option<String>,
    pub youtube_id: Option<String>,
    pub article: Option<String>,
    pub wikipedia: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PatchDto {
    pub small: Option<String>,
    pub large: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RedditDto {
    pub campaign: Option<String>,
    pub launch: Option<String>,
    pub media: Option<String>,
    pub recovery: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FlickrDto {
    #[serde(default)]
    pub small: Vec<String>,
    #[serde(default)]
    pub original: Vec<String>,
}
