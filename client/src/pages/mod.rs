//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped loading and state, and delegates shared
//! rendering details to `components`.

pub mod about;
pub mod home;
pub mod login;
pub mod map;
pub mod product_detail;
pub mod products;
pub mod upload;
