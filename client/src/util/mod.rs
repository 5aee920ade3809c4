//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, fetch
//! lifecycles, navigation guards) from page and component logic.

pub mod auth;
pub mod delay;
pub mod format;
pub mod geo;
pub mod navigation;
pub mod query;
pub mod storage;
