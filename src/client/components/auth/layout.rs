use dioxus::prelude::*;

use crate::client::{components::auth::AuthNavbar, router::Route, store::auth::AuthState};

/// Gate wrapped around every route under `/app`.
///
/// Holds a spinner until the session check has settled, then either renders
/// the protected outlet or bounces the visitor to the login page.
#[component]
pub fn ProtectedLayout() -> Element {
    let auth = use_context::<Signal<AuthState>>();
    let navigator = use_navigator();

    use_effect(move || {
        let auth = auth.read();
        if auth.fetched && !auth.authenticated {
            navigator.replace(Route::Login {});
        }
    });

    if !auth.read().fetched {
        return rsx! {
            div { class: "min-h-screen flex items-center justify-center",
                span { class: "loading loading-spinner loading-lg" }
            }
        };
    }

    if !auth.read().authenticated {
        // The effect above is about to redirect.
        return rsx! { div {} };
    }

    rsx! {
        AuthNavbar {}
        Outlet::<Route> {}
    }
}
