//! Build-time endpoint configuration for the browser bundle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host server forwards `/api` and `/media` to the learning-platform
//! backend, so relative bases work out of the box. Deployments that talk to
//! the backend directly bake absolute bases in at build time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_MEDIA_BASE: &str = "/media";

/// Base URLs used by the REST client and avatar resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix for REST endpoints, without trailing slash.
    pub api_base: &'static str,
    /// Prefix for uploaded media (avatars, course covers), without trailing slash.
    pub media_base: &'static str,
}

impl ApiConfig {
    /// Build a config from explicit bases, trimming trailing slashes.
    pub fn new(api_base: &'static str, media_base: &'static str) -> Self {
        Self { api_base: normalize_base(api_base), media_base: normalize_base(media_base) }
    }

    /// Read `VOLTX_API_BASE` / `VOLTX_MEDIA_BASE` as captured at compile time.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("VOLTX_API_BASE").unwrap_or(DEFAULT_API_BASE),
            option_env!("VOLTX_MEDIA_BASE").unwrap_or(DEFAULT_MEDIA_BASE),
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_MEDIA_BASE)
    }
}

fn normalize_base(raw: &'static str) -> &'static str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { "" } else { trimmed }
}
