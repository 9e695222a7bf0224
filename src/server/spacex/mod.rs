//! Read-only HTTP client for the public SpaceX catalog API.
//!
//! The client performs one attempt per call and reports failures as
//! [`FetchError`]; retry policy lives in the query cache, not here. The base
//! URL is configurable so tests can point the client at a mock server.

use serde::de::DeserializeOwned;

use crate::{
    model::{launch::LaunchDto, launchpad::LaunchpadDto, rocket::RocketDto},
    server::error::{fetch::FetchError, Error},
};

/// SpaceX catalog client.
///
/// Cheap to clone; the inner reqwest client is reference-counted.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Fetch the full launch collection.
    pub async fn list_launches(&self) -> Result<Vec<LaunchDto>, FetchError> {
        self.get_json("/launches").await
    }

    /// Fetch one launch by id.
    pub async fn get_launch(&self, id: &str) -> Result<LaunchDto, FetchError> {
        self.get_json(&format!("/launches/{}", id)).await
    }

    /// Fetch one rocket by id.
    pub async fn get_rocket(&self, id: &str) -> Result<RocketDto, FetchError> {
        self.get_json(&format!("/rockets/{}", id)).await
    }

    /// Fetch one launchpad by id.
    pub async fn get_launchpad(&self, id: &str) -> Result<LaunchpadDto, FetchError> {
        self.get_json(&format!("/launchpads/{}", id)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        serde_json::from_str(&body).map_err(|source| FetchError::Decode { url, source })
    }
}

/// Builder for [`Client`].
#[derive(Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Base URL of the catalog API, without a trailing slash.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.trim_end_matches('/').to_string());
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        Ok(Client {
            http: builder.build()?,
            base_url: self
                .base_url
                .unwrap_or_else(|| crate::server::config::DEFAULT_SPACEX_API_URL.to_string()),
        })
    }
}
