use std::sync::Arc;

use crate::{
    model::{launch::LaunchDto, launchpad::LaunchpadDto, rocket::RocketDto},
    server::{cache::QueryCache, error::Error, spacex},
};

/// Read access to the launch catalog, always routed through the query cache
/// so concurrent requests for the same resource share one upstream call.
pub struct CatalogService<'a> {
    spacex: &'a spacex::Client,
    cache: &'a QueryCache,
}

impl<'a> CatalogService<'a> {
    pub fn new(spacex: &'a spacex::Client, cache: &'a QueryCache) -> Self {
        Self { spacex, cache }
    }

    pub async fn list_launches(&self) -> Result<Arc<Vec<LaunchDto>>, Error> {
        let spacex = self.spacex;
        self.cache
            .launches(|| async move { spacex.list_launches().await.map(Arc::new) })
            .await
            .map_err(Error::from)
    }

    pub async fn get_launch(&self, id: &str) -> Result<Arc<LaunchDto>, Error> {
        let spacex = self.spacex;
        self.cache
            .launch(id, || async move { spacex.get_launch(id).await.map(Arc::new) })
            .await
            .map_err(Error::from)
    }

    pub async fn get_rocket(&self, id: &str) -> Result<Arc<RocketDto>, Error> {
        let spacex = self.spacex;
        self.cache
            .rocket(id, || async move { spacex.get_rocket(id).await.map(Arc::new) })
            .await
            .map_err(Error::from)
    }

    pub async fn get_launchpad(&self, id: &str) -> Result<Arc<LaunchpadDto>, Error> {
        let spacex = self.spacex;
        self.cache
            .launchpad(id, || async move {
                spacex.get_launchpad(id).await.map(Arc::new)
            })
            .await
            .map_err(Error::from)
    }
}
