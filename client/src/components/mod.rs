//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and read/write shared state from Leptos
//! context providers. `header_actions` holds the header's browser-free logic.

pub mod header;
pub mod header_actions;
pub mod login_modal;
pub mod toasts;
