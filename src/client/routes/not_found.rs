use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx!(
        div { class: "min-h-screen flex flex-col items-center justify-center gap-4",
            p { class: "text-2xl",
                "Page not found"
            }
            Link {
                to: Route::Home {},
                class: "btn btn-primary",
                "Back to home"
            }
        }
    )
}
