//! Server application core modules.
//!
//! This module contains all server-side functionality for the Starlog
//! application: HTTP routing, the session-backed authentication gate, the
//! SpaceX catalog client, and the shared query cache that deduplicates and
//! memoizes catalog fetches for the browser client.

pub mod cache;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod spacex;
pub mod startup;
