//! Tests for HTTP controller endpoints.
//!
//! These call the handlers directly with a detached session and an app state
//! pointed at a mock upstream, verifying status codes, session effects, and
//! upstream error mapping.

mod auth;
mod launches;
