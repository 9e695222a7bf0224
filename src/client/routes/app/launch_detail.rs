use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::{
    launch::{LaunchpadCard, RocketCard, StatusBadge},
    Page,
};
use crate::client::router::Route;
use crate::client::util::query::Query;
use crate::model::{launch::LaunchDto, launchpad::LaunchpadDto, rocket::RocketDto};

#[component]
pub fn LaunchDetail(launch_id: String) -> Element {
    let mut launch = use_signal(|| Query::<LaunchDto>::Loading);
    let mut rocket = use_signal(|| Query::<RocketDto>::Loading);
    let mut launchpad = use_signal(|| Query::<LaunchpadDto>::Loading);

    #[cfg(feature = "web")]
    {
        let launch_future = use_resource(use_reactive!(|(launch_id,)| async move {
            crate::client::util::api::get_launch(&launch_id).await
        }));

        let next = Query::from_resource(launch_future.read_unchecked().as_ref());
        if *launch.peek() != next {
            launch.set(next);
        }

        // The rocket and launchpad fetches wait on the launch for their ids;
        // reading the launch signal inside the closure restarts them once it
        // resolves.
        let rocket_future = use_resource(move || async move {
            let rocket_id = launch.read().ready().map(|launch| launch.rocket.clone());

            match rocket_id {
                Some(id) => Some(crate::client::util::api::get_rocket(&id).await),
                None => None,
            }
        });

        let next = Query::from_dependent(rocket_future.read_unchecked().as_ref());
        if *rocket.peek() != next {
            rocket.set(next);
        }

        let launchpad_future = use_resource(move || async move {
            let launchpad_id = launch.read().ready().map(|launch| launch.launchpad.clone());

            match launchpad_id {
                Some(id) => Some(crate::client::util::api::get_launchpad(&id).await),
                None => None,
            }
        });

        let next = Query::from_dependent(launchpad_future.read_unchecked().as_ref());
        if *launchpad.peek() != next {
            launchpad.set(next);
        }
    }

    let launch_query = launch.read().clone();
    let rocket_query = rocket.read().clone();
    let launchpad_query = launchpad.read().clone();

    let body = match launch_query {
        Query::Idle | Query::Loading => rsx!(
            div { class: "flex flex-col gap-4 w-full",
                div { class: "skeleton h-10 w-96" }
                div { class: "skeleton h-4 w-full" }
                div { class: "skeleton h-4 w-full" }
                div { class: "flex flex-col md:flex-row gap-4",
                    div { class: "skeleton h-64 w-full" }
                    div { class: "skeleton h-64 w-full" }
                }
            }
        ),
        Query::Failed(message) => rsx!(
            div { class: "alert alert-error",
                "{message}"
            }
            Link {
                to: Route::Launches {},
                class: "btn btn-outline w-44",
                "Back to launches"
            }
        ),
        Query::Ready(launch) => {
            let date_utc = launch.date_utc.format("%Y-%m-%d %H:%M UTC").to_string();
            let date_local = launch.date_local.format("%Y-%m-%d %H:%M %:z").to_string();
            let patch = launch
                .links
                .patch
                .large
                .clone()
                .or_else(|| launch.links.patch.small.clone());
            let flickr = launch.links.flickr.original.clone();

            rsx!(
                div { class: "flex items-center gap-4",
                    if let Some(patch) = patch {
                        img {
                            class: "w-24 h-24",
                            src: "{patch}",
                            alt: "{launch.name}",
                        }
                    }
                    div { class: "flex flex-col gap-1",
                        div { class: "flex items-center gap-2",
                            h1 { class: "text-2xl font-bold",
                                "{launch.name}"
                            }
                            StatusBadge { success: launch.success }
                        }
                        p { class: "text-sm",
                            "Flight #{launch.flight_number}"
                        }
                        p { class: "text-sm",
                            "{date_utc}"
                        }
                        p { class: "text-sm",
                            "Local time: {date_local}"
                        }
                    }
                }
                if let Some(details) = &launch.details {
                    p {
                        "{details}"
                    }
                }
                if !launch.failures.is_empty() {
                    div { class: "card bg-base-200 shadow-sm",
                        div { class: "card-body",
                            h2 { class: "card-title",
                                "Failures"
                            }
                            ul { class: "list-disc pl-6 text-sm",
                                {launch.failures.iter().map(|failure| {
                                    let altitude = failure
                                        .altitude
                                        .map(|altitude| format!(" at {altitude} m"))
                                        .unwrap_or_default();

                                    rsx! {
                                        li {
                                            "T+{failure.time}s{altitude}: {failure.reason}"
                                        }
                                    }
                                })}
                            }
                        }
                    }
                }
                ul { class: "flex flex-wrap gap-2",
                    if let Some(webcast) = &launch.links.webcast {
                        li {
                            a { href: "{webcast}",
                                button { class: "btn btn-outline btn-sm",
                                    "Webcast"
                                }
                            }
                        }
                    }
                    if let Some(article) = &launch.links.article {
                        li {
                            a { href: "{article}",
                                button { class: "btn btn-outline btn-sm",
                                    "Article"
                                }
                            }
                        }
                    }
                    if let Some(wikipedia) = &launch.links.wikipedia {
                        li {
                            a { href: "{wikipedia}",
                                button { class: "btn btn-outline btn-sm",
                                    "Wikipedia"
                                }
                            }
                        }
                    }
                    if let Some(presskit) = &launch.links.presskit {
                        li {
                            a { href: "{presskit}",
                                button { class: "btn btn-outline btn-sm",
                                    "Press kit"
                                }
                            }
                        }
                    }
                }
                if !flickr.is_empty() {
                    div { class: "flex flex-wrap gap-2",
                        {flickr.iter().take(6).map(|image| rsx! {
                            img {
                                class: "h-40 rounded object-cover",
                                src: "{image}",
                                alt: "{launch.name}",
                            }
                        })}
                    }
                }
                div { class: "flex flex-col md:flex-row gap-4",
                    RocketCard { rocket: rocket_query }
                    LaunchpadCard { launchpad: launchpad_query }
                }
                Link {
                    to: Route::Launches {},
                    class: "btn btn-outline w-44",
                    "Back to launches"
                }
            )
        }
    };

    rsx!(
        Title { "Launch | Starlog" }
        Meta {
            name: "description",
            content: "Launch details with rocket and launchpad information."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1024px] p-6 flex flex-col gap-4",
                {body}
            }
        }
    )
}
