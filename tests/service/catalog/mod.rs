mod get_launch;
mod list_launches;
