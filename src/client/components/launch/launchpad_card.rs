use dioxus::prelude::*;

use crate::client::util::query::Query;
use crate::model::launchpad::LaunchpadDto;

#[component]
pub fn LaunchpadCard(launchpad: Query<LaunchpadDto>) -> Element {
    let body = match &launchpad {
        Query::Idle | Query::Loading => rsx!(
            div { class: "skeleton h-6 w-40" }
            div { class: "skeleton h-4 w-full mt-2" }
            div { class: "skeleton h-4 w-64 mt-2" }
        ),
        Query::Failed(message) => rsx!(
            div { class: "alert alert-error",
                "{message}"
            }
        ),
        Query::Ready(launchpad) => rsx!(
            p { class: "text-lg font-semibold",
                "{launchpad.full_name}"
            }
            if let Some(details) = &launchpad.details {
                p { class: "text-sm",
                    "{details}"
                }
            }
            ul { class: "list-disc pl-6 text-sm",
                li { "Status: {launchpad.status}" }
                li { "Location: {launchpad.locality}, {launchpad.region}" }
                li { "Launch attempts: {launchpad.launch_attempts}" }
                li { "Launch successes: {launchpad.launch_successes}" }
                li { "Timezone: {launchpad.timezone}" }
            }
            if let Some(image) = launchpad.images.large.first() {
                img {
                    class: "rounded max-h-64 object-cover",
                    src: "{image}",
                    alt: "{launchpad.full_name}",
                }
            }
        ),
    };

    rsx!(
        div {
            class: "card bg-base-200 shadow-sm w-full",
            div {
                class: "card-body",
                h2 { class: "card-title",
                    "Launchpad"
                }
                {body}
            }
        }
    )
}
