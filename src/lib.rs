//! Starlog library crate.
//!
//! Exposes the shared data models and, behind the `server` feature, the
//! server application core used by the fullstack binary and the test suite.

pub mod model;

#[cfg(feature = "server")]
pub mod server;
