//! Networking modules for the catalog backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues one HTTP round trip per backend operation, `types` defines the
//! wire schema, `error` classifies failures, and `config` resolves the backend
//! base URL.

pub mod api;
pub mod config;
pub mod error;
pub mod types;
