use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::auth::AuthState;

#[component]
pub fn Login() -> Element {
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let submitting = use_signal(|| false);
    let auth = use_context::<Signal<AuthState>>();
    let navigator = use_navigator();

    // Skip the form when the session is already authenticated
    use_effect(move || {
        let auth = auth.read();
        if auth.fetched && auth.authenticated {
            navigator.replace(Route::Launches {});
        }
    });

    let submit = move |event: FormEvent| {
        event.prevent_default();

        if *submitting.peek() {
            return;
        }

        if username.read().trim().is_empty() || password.read().is_empty() {
            error.set(Some("Username and password are required".to_string()));
            return;
        }

        #[cfg(feature = "web")]
        {
            let mut auth = auth;
            let mut submitting = submitting;

            submitting.set(true);
            error.set(None);

            spawn(async move {
                let user = username.peek().clone();
                let pass = password.peek().clone();

                match crate::client::util::api::post_login(&user, &pass).await {
                    Ok(session) => {
                        auth.set(AuthState::resolved(session.authenticated));
                        navigator.replace(Route::Launches {});
                    }
                    Err(message) => error.set(Some(message)),
                }

                submitting.set(false);
            });
        }
    };

    rsx!(
        Title { "Login | Starlog" }
        Meta {
            name: "description",
            content: "Log in to browse the SpaceX launch catalog."
        }
        Page { class: "flex items-center justify-center",
            div { class: "card bg-base-200 shadow-sm w-full max-w-96",
                div { class: "card-body",
                    h2 { class: "card-title",
                        "Login"
                    }
                    form { class: "flex flex-col gap-3",
                        onsubmit: submit,
                        input {
                            class: "input input-bordered w-full",
                            r#type: "text",
                            placeholder: "Username",
                            value: "{username}",
                            oninput: move |event| username.set(event.value()),
                        }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "password",
                            placeholder: "Password",
                            value: "{password}",
                            oninput: move |event| password.set(event.value()),
                        }
                        if let Some(message) = error() {
                            div { class: "alert alert-error text-sm",
                                "{message}"
                            }
                        }
                        button {
                            class: "btn btn-primary w-full",
                            r#type: "submit",
                            disabled: submitting(),
                            if submitting() {
                                span { class: "loading loading-spinner" }
                            } else {
                                "Login"
                            }
                        }
                    }
                    p { class: "text-xs text-center",
                        "Demo credentials: admin / password"
                    }
                }
            }
        }
    )
}
