//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shell chrome and shared catalog widgets while pages
//! own data loading and route state.

pub mod header;
pub mod map_canvas;
pub mod product_card;
pub mod protected;
pub mod status;
