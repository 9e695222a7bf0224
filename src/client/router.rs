use dioxus::prelude::*;

use crate::client::{
    components::{auth::ProtectedLayout, Navbar},
    routes::{
        app::{LaunchDetail, Launches},
        Home, Login, NotFound,
    },
};

use crate::client::routes::app::Launches as AppIndex;
use crate::client::routes::NotFound as AppNotFound;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },

    #[end_layout]

    #[nest("/app")]

        #[layout(ProtectedLayout)]

        #[route("/")]
        AppIndex {},

        #[route("/launches")]
        Launches {},

        #[route("/launches/:launch_id")]
        LaunchDetail { launch_id: String },

        #[route("/:..segments")]
        AppNotFound { segments: Vec<String> },
}
