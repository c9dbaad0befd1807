//! Session gate in front of the dashboard routes

pub mod authority;
pub mod guard;

pub use authority::{HttpSessionAuthority, SessionAuthority, SessionVerdict};
pub use guard::{GuardDecision, SessionGuard};
