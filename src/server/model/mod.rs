//! Server application models and type definitions.
//!
//! Contains the application state shared by all handlers and the typed
//! session wrappers used by the authentication gate.

pub mod app;
pub mod session;
