#![allow(non_snake_case)]

mod client;
mod model;

#[cfg(feature = "server")]
use starlog::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, model::app::AppState, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let spacex = startup::build_spacex_client(&config).unwrap();
        let cache = startup::build_query_cache(&config);
        let session = startup::session_layer();

        tracing::info!("Starting server");

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes()
            .with_state(AppState { spacex, cache })
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
