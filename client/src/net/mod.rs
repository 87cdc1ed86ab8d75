//! Networking modules for the learning-platform REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` classifies their failures, and
//! `types` defines the JSON schema shared with the backend.

pub mod api;
pub mod error;
pub mod types;
