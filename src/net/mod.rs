//! Networking modules for the dashboard REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `request` is the pipeline every call flows through (authorization
//! header, envelope unwrapping, failure classification), `api` holds the
//! typed per-endpoint wrappers, and `types` defines the wire schema.

pub mod api;
pub mod request;
pub mod types;
