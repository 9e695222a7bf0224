use crate::server::{cache::QueryCache, spacex};

#[derive(Clone)]
pub struct AppState {
    pub spacex: spacex::Client,
    pub cache: QueryCache,
}
