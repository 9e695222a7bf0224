use std::sync::Arc;

use mockito::{Server, ServerGuard};
use starlog::server::{
    cache::{CacheConfig, QueryCache},
    model::app::AppState,
    spacex,
};
use tower_sessions::{MemoryStore, Session};

pub static TEST_USER_AGENT: &str =
    "starlog-tests/0.1.0 (contact@example.com; +https://github.com/starlog-app/starlog)";

pub struct TestSetup {
    pub server: ServerGuard,
    pub state: AppState,
    pub session: Session,
}

/// Returns an [`AppState`] pointed at a fresh mock server plus a detached
/// session, used across integration tests.
pub async fn test_setup() -> TestSetup {
    test_setup_with_cache(CacheConfig::default()).await
}

/// Same as [`test_setup`] but with explicit cache tuning, for tests that
/// exercise staleness and retry behavior.
pub async fn test_setup_with_cache(config: CacheConfig) -> TestSetup {
    let mock_server = Server::new_async().await;
    let mock_server_url = mock_server.url();

    let spacex = spacex::Client::builder()
        .base_url(&mock_server_url)
        .user_agent(TEST_USER_AGENT)
        .build()
        .expect("Failed to build catalog client");

    let store = Arc::new(MemoryStore::default());
    let session = Session::new(None, store, None);

    let state = AppState {
        spacex,
        cache: QueryCache::new(config),
    };

    TestSetup {
        server: mock_server,
        state,
        session,
    }
}
