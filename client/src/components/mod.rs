//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and interaction surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod navbar;
pub mod post_composer;
pub mod route_gate;
pub mod saved_posts;
pub mod toaster;
