//! Networking modules for the research backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls and `types` defines the wire schema.

pub mod api;
pub mod types;
