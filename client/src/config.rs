//! Build-time client configuration.
//!
//! The backend base URL is baked into the WASM bundle from the
//! `POSTCRAFT_API_BASE_URL` environment variable at compile time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Backend base URL without a trailing slash.
pub fn api_base_url() -> &'static str {
    normalize_base_url(option_env!("POSTCRAFT_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base_url(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed }
}
