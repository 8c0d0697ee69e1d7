//! Client configuration with compiled-in defaults and env overrides.
//!
//! In the browser the process environment is empty, so `from_env` yields the
//! defaults; native builds (tests, tooling) can point at another API base.

pub const DEFAULT_API_BASE: &str = "/api/v1";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_TITLE: &str = "Blog";
pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix joined in front of every endpoint path, without trailing slash.
    pub api_base: String,
    pub request_timeout_ms: u64,
    /// Document title used when a route has none of its own.
    pub default_title: String,
    pub login_path: String,
    pub home_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            default_title: DEFAULT_TITLE.to_owned(),
            login_path: LOGIN_PATH.to_owned(),
            home_path: HOME_PATH.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build config from environment variables, falling back to defaults.
    ///
    /// Optional:
    /// - `BLOG_API_BASE`: default `/api/v1`
    /// - `BLOG_REQUEST_TIMEOUT_MS`: default 5000
    /// - `BLOG_DEFAULT_TITLE`: default `Blog`
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let api_base = std::env::var("BLOG_API_BASE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map_or(defaults.api_base, |v| v.trim().trim_end_matches('/').to_owned());
        let default_title = std::env::var("BLOG_DEFAULT_TITLE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.default_title);

        Self {
            api_base,
            request_timeout_ms: env_parse_u64("BLOG_REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS),
            default_title,
            ..defaults
        }
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
