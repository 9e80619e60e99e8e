//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `composer`, `gallery`, `toast`) so
//! individual components can depend on small focused models. The plain state
//! machines carry no reactive types; `session` and `toast` add the context
//! handles that `App` provides.

pub mod composer;
pub mod gallery;
pub mod session;
pub mod toast;
