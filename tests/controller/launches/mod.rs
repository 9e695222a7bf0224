mod get_launch;
mod get_launchpad;
mod get_rocket;
mod list_launches;
