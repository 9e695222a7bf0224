//! Shared query cache for catalog resources.
//!
//! A strongly-typed composition of [`SingleFlight`] sub-caches, one per
//! resource kind, so every cached value keeps its concrete type instead of
//! going through an untyped lookup table. The cache guarantees single-flight
//! per key, serves fresh entries without refetching, and garbage-collects
//! entries unused beyond the configured horizon.

pub mod single_flight;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::{
    model::{launch::LaunchDto, launchpad::LaunchpadDto, rocket::RocketDto},
    server::error::fetch::FetchError,
};

pub use single_flight::{Outcome, SingleFlight};

/// Cache tuning knobs, loaded from the environment at startup.
#[derive(Clone, Copy, Debug)]
pub struct CacheConfig {
    /// Duration a completed outcome stays fresh. With `Duration::ZERO` every
    /// new request refetches, while concurrent requests still share one
    /// in-flight fetch.
    pub stale_time: Duration,
    /// Idle time after which the GC task evicts a completed entry.
    pub gc_time: Duration,
    /// Whether a failed fetch gets one immediate re-attempt.
    pub retry: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            stale_time: Duration::ZERO,
            gc_time: Duration::from_secs(900),
            retry: false,
        }
    }
}

struct CacheInner {
    config: CacheConfig,
    launches: SingleFlight<(), Arc<Vec<LaunchDto>>>,
    launch: SingleFlight<String, Arc<LaunchDto>>,
    rocket: SingleFlight<String, Arc<RocketDto>>,
    launchpad: SingleFlight<String, Arc<LaunchpadDto>>,
}

/// Typed cache over the closed set of catalog resource kinds.
///
/// Cheap to clone; clones share the same slots, so every handler sees one
/// cache.
#[derive(Clone)]
pub struct QueryCache {
    inner: Arc<CacheInner>,
}

impl QueryCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            inner: Arc::new(CacheInner {
                config,
                launches: SingleFlight::new(),
                launch: SingleFlight::new(),
                rocket: SingleFlight::new(),
                launchpad: SingleFlight::new(),
            }),
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.inner.config
    }

    pub async fn launches<F, Fut>(&self, fetch: F) -> Outcome<Arc<Vec<LaunchDto>>>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<Arc<Vec<LaunchDto>>, FetchError>>,
    {
        self.inner
            .launches
            .get_or_fetch((), &self.inner.config, fetch)
            .await
    }

    pub async fn launch<F, Fut>(&self, id: &str, fetch: F) -> Outcome<Arc<LaunchDto>>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<Arc<LaunchDto>, FetchError>>,
    {
        self.inner
            .launch
            .get_or_fetch(id.to_string(), &self.inner.config, fetch)
            .await
    }

    pub async fn rocket<F, Fut>(&self, id: &str, fetch: F) -> Outcome<Arc<RocketDto>>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<Arc<RocketDto>, FetchError>>,
    {
        self.inner
            .rocket
            .get_or_fetch(id.to_string(), &self.inner.config, fetch)
            .await
    }

    pub async fn launchpad<F, Fut>(&self, id: &str, fetch: F) -> Outcome<Arc<LaunchpadDto>>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<Arc<LaunchpadDto>, FetchError>>,
    {
        self.inner
            .launchpad
            .get_or_fetch(id.to_string(), &self.inner.config, fetch)
            .await
    }

    /// Evicts every completed entry unused for longer than the configured
    /// GC horizon. Called periodically by the background task spawned in
    /// startup.
    pub fn evict_unused(&self) {
        let max_idle = self.inner.config.gc_time;
        self.inner.launches.evict_unused(max_idle);
        self.inner.launch.evict_unused(max_idle);
        self.inner.rocket.evict_unused(max_idle);
        self.inner.launchpad.evict_unused(max_idle);
    }

    /// Explicit invalidation of everything cached.
    pub fn clear(&self) {
        self.inner.launches.clear();
        self.inner.launch.clear();
        self.inner.rocket.clear();
        self.inner.launchpad.clear();
    }
}
