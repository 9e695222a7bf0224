use dioxus::prelude::*;

/// Full-height page shell that clears the fixed navbar.
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let extra = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-[64px] p-4 {extra}",
            {children}
        }
    )
}
