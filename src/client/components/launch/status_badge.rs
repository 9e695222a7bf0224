use dioxus::prelude::*;

/// Outcome badge for a launch; `None` means the result is not known yet.
#[component]
pub fn StatusBadge(#[props(!optional)] success: Option<bool>) -> Element {
    let (class, label) = match success {
        Some(true) => ("badge badge-success", "Success"),
        Some(false) => ("badge badge-error", "Failure"),
        None => ("badge badge-ghost", "Unknown"),
    };

    rsx!(
        span { class: "{class}",
            "{label}"
        }
    )
}
