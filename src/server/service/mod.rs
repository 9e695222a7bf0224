//! Business logic between the HTTP controllers and the underlying stores.

pub mod auth;
pub mod catalog;
