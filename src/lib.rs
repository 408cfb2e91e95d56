//! This crate provides the Actor Showcase API: a small, read-only HTTP service
//! over a hard-coded catalog of actor records, plus derived views (filter by
//! country, filter by award winners, aggregate statistics). A companion
//! terminal dashboard binary consumes the API and renders the same data.
//!
//! The catalog is immutable and lives in process memory for the lifetime of
//! the server; there is no persistence layer and no write path.
//!
//! The server is built on top of a number of open source components.
//!
//! * [Tokio](tokio), the most popular asynchronous Rust runtime.
//! * [Axum](axum) web framework, built by the Tokio team on top of various
//!   popular components, including the [hyper] HTTP library.
//! * [Serde](serde) performs (de)serialisation of JSON response data.
//! * [validator] enforces record invariants at construction time.

pub mod app;
pub mod app_state;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod metrics;
pub mod models;
pub mod server;
#[cfg(test)]
pub mod test_utils;
pub mod tracing;
