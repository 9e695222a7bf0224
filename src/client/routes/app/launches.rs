use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::{launch::StatusBadge, Page};
use crate::client::router::Route;
use crate::client::util::paging::{filter_launches, page_count, page_slice, ListControls, PAGE_SIZE};
use crate::client::util::query::Query;
use crate::model::launch::LaunchDto;

#[component]
pub fn Launches() -> Element {
    let mut controls = use_signal(ListControls::default);
    let mut launches = use_signal(|| Query::<Vec<LaunchDto>>::Loading);

    // Retrieve the launch collection on component load
    #[cfg(feature = "web")]
    {
        let future =
            use_resource(|| async move { crate::client::util::api::get_launches().await });

        let next = Query::from_resource(future.read_unchecked().as_ref());
        if *launches.peek() != next {
            launches.set(next);
        }
    }

    let query = launches.read().clone();

    let body = match query {
        Query::Idle | Query::Loading => rsx!(
            div { class: "flex flex-col gap-2 w-full",
                div { class: "skeleton h-10 w-full" }
                div { class: "skeleton h-10 w-full" }
                div { class: "skeleton h-10 w-full" }
                div { class: "skeleton h-10 w-full" }
            }
        ),
        Query::Failed(message) => rsx!(
            div { class: "alert alert-error",
                "{message}"
            }
        ),
        Query::Ready(all) => {
            let state = controls.read().clone();
            let filtered = filter_launches(&all, state.term());

            if filtered.is_empty() {
                let term = state.term().to_string();

                rsx!(
                    p { class: "text-center p-6",
                        if term.is_empty() {
                            "No launches found"
                        } else {
                            "No launches match \"{term}\""
                        }
                    }
                )
            } else {
                let pages = page_count(filtered.len(), PAGE_SIZE);
                let current = state.page().clamp(1, pages);
                let visible: Vec<LaunchDto> = page_slice(&filtered, current, PAGE_SIZE)
                    .iter()
                    .map(|launch| (*launch).clone())
                    .collect();

                rsx!(
                    div { class: "overflow-x-auto w-full",
                        table {
                            class: "table table-md",
                            thead {
                                tr {
                                    th { "Flight" }
                                    th { "Mission" }
                                    th { "Date (UTC)" }
                                    th { "Outcome" }
                                }
                            }
                            tbody {
                                {visible.iter().map(|launch| rsx! {
                                    tr {
                                        td { "{launch.flight_number}" }
                                        td {
                                            Link {
                                                to: Route::LaunchDetail { launch_id: launch.id.clone() },
                                                class: "link link-primary",
                                                "{launch.name}"
                                            }
                                        }
                                        td {
                                            {launch.date_utc.format("%Y-%m-%d").to_string()}
                                        }
                                        td {
                                            StatusBadge { success: launch.success }
                                        }
                                    }
                                })}
                            }
                        }
                    }
                    if pages > 1 {
                        div { class: "join flex justify-center",
                            button {
                                class: "join-item btn",
                                disabled: current == 1,
                                onclick: move |_| controls.write().set_page(current.saturating_sub(1).max(1)),
                                "«"
                            }
                            button { class: "join-item btn pointer-events-none",
                                "Page {current} of {pages}"
                            }
                            button {
                                class: "join-item btn",
                                disabled: current == pages,
                                onclick: move |_| controls.write().set_page((current + 1).min(pages)),
                                "»"
                            }
                        }
                    }
                )
            }
        }
    };

    let term = controls.read().term().to_string();

    rsx!(
        Title { "Launches | Starlog" }
        Meta {
            name: "description",
            content: "Search and browse the SpaceX launch catalog."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1024px] p-6 flex flex-col gap-4",
                h1 { class: "text-2xl font-bold",
                    "Launches"
                }
                input {
                    class: "input input-bordered w-full max-w-96",
                    r#type: "search",
                    placeholder: "Search launches by name",
                    value: "{term}",
                    oninput: move |event| controls.write().set_term(event.value()),
                }
                {body}
            }
        }
    )
}
