use std::sync::Arc;

use tower_sessions::{MemoryStore, Session};

/// Create a detached session backed by a fresh in-memory store.
pub fn test_session() -> Session {
    let store = Arc::new(MemoryStore::default());

    Session::new(None, store, None)
}
