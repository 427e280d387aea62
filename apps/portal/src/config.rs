//! Client configuration loaded from environment variables.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file by `main`.
//!
//! # Environment Variables
//!
//! - `PORTAL_API_BASE`: CMS API base URL (default: "http://localhost:5000")
//! - `PORTAL_ORIGIN`: origin the portal pages are served from, used for
//!   same-origin checks on referrers (default: "http://localhost:5173")
//! - `PORTAL_REQUEST_TIMEOUT_SECONDS`: per-request HTTP timeout (default: 15)
//! - `PORTAL_LIKE_TIMEOUT_SECONDS`: deadline for a like toggle (default: 10)
//! - `PORTAL_ADMIN_PAGE_SIZE`: rows per admin queue page (default: 10)
//! - `PORTAL_SESSION_COOKIE`: `name=value` cookie sent with every request
//! - `PORTAL_LIST_URL`: saved article list URL for back navigation
//! - `RUST_LOG`: logging filter (default: "info,portal=debug")

use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base: Url,
    pub origin: Url,
    pub request_timeout_seconds: u64,
    pub like_timeout_seconds: u64,
    pub admin_page_size: u32,
    /// Session cookie in `name=value` form.
    pub session_cookie: Option<String>,
    pub saved_list_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            api_base: env_or(&lookup, "PORTAL_API_BASE", default_url("http://localhost:5000")?)?,
            origin: env_or(&lookup, "PORTAL_ORIGIN", default_url("http://localhost:5173")?)?,
            request_timeout_seconds: env_or(&lookup, "PORTAL_REQUEST_TIMEOUT_SECONDS", 15)?,
            like_timeout_seconds: env_or(&lookup, "PORTAL_LIKE_TIMEOUT_SECONDS", 10)?,
            admin_page_size: env_or(&lookup, "PORTAL_ADMIN_PAGE_SIZE", 10)?,
            session_cookie: non_blank(lookup("PORTAL_SESSION_COOKIE")),
            saved_list_url: non_blank(lookup("PORTAL_LIST_URL")),
        };

        if config.api_base.cannot_be_a_base() {
            anyhow::bail!("PORTAL_API_BASE must be a hierarchical URL: {}", config.api_base);
        }
        if config.admin_page_size == 0 {
            anyhow::bail!("PORTAL_ADMIN_PAGE_SIZE must be at least 1");
        }
        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    pub fn like_timeout(&self) -> Duration {
        Duration::from_secs(self.like_timeout_seconds)
    }
}

fn default_url(raw: &str) -> anyhow::Result<Url> {
    Ok(Url::parse(raw)?)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Returns the parsed variable if set, otherwise the default.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T, F>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        None => Ok(default),
    }
}
