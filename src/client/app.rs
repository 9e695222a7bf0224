use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::client::{router::Route, store::auth::AuthState};

#[component]
pub fn App() -> Element {
    #[allow(unused_mut, unused_variables)]
    let mut auth = use_context_provider(|| Signal::new(AuthState::default()));

    // Hydrate the authentication flag from the session cookie on load
    #[cfg(feature = "web")]
    use_future(move || async move {
        match crate::client::util::api::get_session().await {
            Ok(session) => auth.set(AuthState::resolved(session.authenticated)),
            Err(err) => {
                tracing::error!(err);
                auth.set(AuthState::resolved(false));
            }
        }
    });

    rsx! {
        Router::<Route> {}
    }
}
