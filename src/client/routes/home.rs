use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRocket;
use dioxus_free_icons::Icon;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::auth::AuthState;

#[component]
pub fn HomeActions() -> Element {
    let auth = use_context::<Signal<AuthState>>();

    rsx!(
        ul { class: "flex gap-2",
            if auth.read().authenticated {
                li {
                    Link {
                        to: Route::Launches {},
                        class: "btn btn-primary w-36",
                        "Browse Launches"
                    }
                }
                li {
                    a { href: "/api/docs",
                        button {
                            class: "btn btn-secondary w-28",
                            "API Docs"
                        }
                    }
                }
            } else if auth.read().fetched {
                li {
                    Link {
                        to: Route::Login {},
                        class: "btn btn-primary w-28",
                        "Login"
                    }
                }
            }
        }
    )
}

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Starlog Home" }
        Meta {
            name: "description",
            content: "Browse the SpaceX launch catalog: launches, rockets, and launchpads."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                div { class: "flex items-center gap-2",
                    Icon {
                        width: 28,
                        height: 28,
                        icon: FaRocket
                    }
                    p { class: "text-2xl",
                        "Starlog"
                    }
                    p {
                        "v0.1.0"
                    }
                }
                div {
                    HomeActions { }
                }
                div { class: "flex flex-col gap-2 px-4 max-w-256",
                    p { class: "font-bold text-center",
                        "A launch catalog explorer for SpaceX missions"
                    }
                    p {
                        "Starlog pulls the public SpaceX launch archive and lets you search
                        every mission by name, page through the full history, and drill into
                        a single launch to see its rocket and launchpad."
                    }
                    p {
                        "Log in to browse the catalog. The catalog is read-only and the demo
                        credentials are shown on the login page."
                    }
                }
            }
        }
    )
}
