//! Networking modules for the profile REST endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the HTTP calls and `types` defines the error type and the
//! `ProfileService` seam used by the login flow.

pub mod api;
pub mod types;
