//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages are thin: the header above them owns search and auth, and the
//! course pages only render whatever the last search stored.

pub mod courses;
pub mod home;
pub mod section;
