use dioxus::prelude::*;

use crate::client::util::query::Query;
use crate::model::rocket::RocketDto;

#[component]
pub fn RocketCard(rocket: Query<RocketDto>) -> Element {
    let body = match &rocket {
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
        Query::Ready(rocket) => {
            let height = rocket
                .height
                .meters
                .map(|meters| format!("{meters} m"))
                .unwrap_or_else(|| "unknown".to_string());

            rsx!(
                p { class: "text-lg font-semibold",
                    "{rocket.name}"
                }
                if let Some(description) = &rocket.description {
                    p { class: "text-sm",
                        "{description}"
                    }
                }
                ul { class: "list-disc pl-6 text-sm",
                    li { "Type: {rocket.rocket_type}" }
                    li {
                        if rocket.active {
                            "Status: Active"
                        } else {
                            "Status: Retired"
                        }
                    }
                    li { "First flight: {rocket.first_flight}" }
                    li { "Country: {rocket.country}" }
                    li { "Company: {rocket.company}" }
                    li { "Stages: {rocket.stages}" }
                    li { "Success rate: {rocket.success_rate_pct}%" }
                    li { "Cost per launch: ${rocket.cost_per_launch}" }
                    li { "Height: {height}" }
                    li { "Mass: {rocket.mass.kg} kg" }
                }
                if let Some(wikipedia) = &rocket.wikipedia {
                    a { href: "{wikipedia}",
                        button { class: "btn btn-outline btn-sm",
                            "Wikipedia"
                        }
                    }
                }
            )
        }
    };

    rsx!(
        div {
            class: "card bg-base-200 shadow-sm w-full",
            div {
                class: "card-body",
                h2 { class: "card-title",
                    "Rocket"
                }
                {body}
            }
        }
    )
}
