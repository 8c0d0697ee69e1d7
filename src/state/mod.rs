//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `auth`, `notice`) so components can
//! depend on small focused models.

pub mod auth;
pub mod notice;
pub mod session;
