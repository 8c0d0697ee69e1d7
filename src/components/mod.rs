//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared auth and notice signals from Leptos context and
//! stay free of request logic; pages own the API calls.

pub mod guarded;
pub mod nav_bar;
pub mod notice_list;
