//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storage` wraps browser `localStorage` behind a trait with an in-memory
//! twin; `markdown` turns article bodies into HTML and plain-text excerpts.

pub mod markdown;
pub mod storage;
