//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `courses`, `notify`, `ui`) so individual
//! components can depend on small focused models. `store` ties the domain
//! signals to the backend behind the `AuthStore` trait.

pub mod auth;
pub mod courses;
pub mod notify;
pub mod store;
pub mod ui;
