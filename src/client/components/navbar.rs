use dioxus::prelude::*;

pub use crate::client::router::Route;
use crate::client::store::auth::AuthState;

#[component]
pub fn Navbar() -> Element {
    let auth = use_context::<Signal<AuthState>>();

    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                div { class: "flex items-center gap-2",
                    p { class: "text-xl",
                        "Starlog"
                    }
                    p { class: "text-xs",
                        "v0.1.0"
                    }
                }
            }
            div {
                class: "navbar-end",
                ul { class: "flex gap-2",
                    if auth.read().authenticated {
                        li {
                            Link {
                                to: Route::Launches {},
                                class: "btn btn-primary w-28",
                                "Launches"
                            }
                        }
                        li {
                            a { href: "/api/auth/logout",
                                button {
                                    class: "btn btn-outline w-28",
                                    "Logout"
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
            }
        }

        Outlet::<Route> {}
    }
}
