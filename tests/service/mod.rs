//! Tests for the catalog service and the cache behavior behind it.

mod catalog;
