//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its API calls and form state. Input checks live in plain
//! functions next to the component so they can be tested without a DOM.

pub mod article;
pub mod article_edit;
pub mod home;
pub mod login;
pub mod profile;
