use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::server::{
    cache::{CacheConfig, QueryCache},
    config::Config,
    error::Error,
    spacex,
};

/// Build and configure the SpaceX catalog client
pub fn build_spacex_client(config: &Config) -> Result<spacex::Client, Error> {
    let client = spacex::Client::builder()
        .base_url(&config.spacex_api_url)
        .user_agent(&config.user_agent)
        .build()?;

    Ok(client)
}

/// Build the shared query cache and spawn its garbage-collection task
pub fn build_query_cache(config: &Config) -> QueryCache {
    let cache = QueryCache::new(CacheConfig {
        stale_time: config.cache_stale_time,
        gc_time: config.cache_gc_time,
        retry: config.cache_retry,
    });

    let gc = cache.clone();
    let period = config.cache_gc_time;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            gc.evict_unused();
        }
    });

    cache
}

/// Configure in-memory session management
pub fn session_layer() -> SessionManagerLayer<MemoryStore> {
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};

    let session_store = MemoryStore::default();

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
}
