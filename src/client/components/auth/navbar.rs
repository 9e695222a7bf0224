use dioxus::prelude::*;

use crate::client::components::StarlogTitleButton;
use crate::client::router::Route;

#[component]
pub fn AuthNavbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed",
            div {
                class: "navbar-start",
                div { class: "flex items-center gap-4",
                    StarlogTitleButton {}
                    Link {
                        to: Route::Launches {},
                        class: "btn btn-ghost",
                        "Launches"
                    }
                }
            }
            div {
                class: "navbar-end",
                div { class: "h-10",
                    a { href: "/api/auth/logout",
                        button {
                            class: "btn btn-outline",
                            "Logout"
                        }
                    }
                }
            }
        }
    }
}
