//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page declares its access requirement through `RouteGate` and delegates
//! rendering details to `components`.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;
