//! Client-side state models.
//!
//! DESIGN
//! ======
//! State is split by view (`catalog`, `map`, `upload`) plus the cross-cutting
//! `session` and `query` models, so pages depend on small focused types that
//! are testable without a browser.

pub mod catalog;
pub mod map;
pub mod navigation;
pub mod query;
pub mod session;
pub mod upload;
