pub mod api;
pub mod auth;
pub mod launch;
pub mod launchpad;
pub mod rocket;
