//! Networking modules for the blog REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` names the endpoints, `pipeline` attaches credentials and normalizes
//! responses, `transport` performs the HTTP exchange, `notify` holds the
//! user-facing side effects, and `types` defines the wire schema.

pub mod api;
pub mod notify;
pub mod pipeline;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
