//! Session data models and utilities.
//!
//! Type-safe wrappers for session data storage and retrieval using
//! tower-sessions. The only piece of session state Starlog keeps is the
//! authentication flag; there is no server-side user identity beyond it.

pub mod auth;
