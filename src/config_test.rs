use std::sync::{Mutex, MutexGuard};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers must hold `env_lock()` so env mutations do not race.
unsafe fn clear_blog_env() {
    unsafe {
        std::env::remove_var("BLOG_API_BASE");
        std::env::remove_var("BLOG_REQUEST_TIMEOUT_MS");
        std::env::remove_var("BLOG_DEFAULT_TITLE");
    }
}

#[test]
fn from_env_defaults() {
    let _guard = env_lock();
    unsafe { clear_blog_env() };

    let cfg = ClientConfig::from_env();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api_base, "/api/v1");
    assert_eq!(cfg.request_timeout_ms, 5000);
    assert_eq!(cfg.login_path, "/login");
    assert_eq!(cfg.home_path, "/");
}

#[test]
fn from_env_parses_overrides() {
    let _guard = env_lock();
    unsafe {
        clear_blog_env();
        std::env::set_var("BLOG_API_BASE", "https://blog.example.test/api/v1/");
        std::env::set_var("BLOG_REQUEST_TIMEOUT_MS", "1500");
        std::env::set_var("BLOG_DEFAULT_TITLE", "Notes");
    }

    let cfg = ClientConfig::from_env();
    assert_eq!(cfg.api_base, "https://blog.example.test/api/v1");
    assert_eq!(cfg.request_timeout_ms, 1500);
    assert_eq!(cfg.default_title, "Notes");

    unsafe { clear_blog_env() };
}

#[test]
fn from_env_ignores_invalid_timeout() {
    let _guard = env_lock();
    unsafe {
        clear_blog_env();
        std::env::set_var("BLOG_REQUEST_TIMEOUT_MS", "soon");
    }
    assert_eq!(ClientConfig::from_env().request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);

    unsafe { std::env::set_var("BLOG_REQUEST_TIMEOUT_MS", "0") };
    assert_eq!(ClientConfig::from_env().request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);

    unsafe { clear_blog_env() };
}

#[test]
fn from_env_blank_base_keeps_default() {
    let _guard = env_lock();
    unsafe {
        clear_blog_env();
        std::env::set_var("BLOG_API_BASE", "   ");
    }
    assert_eq!(ClientConfig::from_env().api_base, DEFAULT_API_BASE);
    unsafe { clear_blog_env() };
}
