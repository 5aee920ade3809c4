//! Backend endpoint configuration.
//!
//! The base URL is baked in at compile time from `HERITAGE_API_URL` because
//! the WASM bundle has no process environment to read at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when `HERITAGE_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Resolved backend base URL without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("HERITAGE_API_URL"))
}

fn normalize_base_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_owned()
}

/// Join the base URL with an absolute API path.
pub fn endpoint(path: &str) -> String {
    join_endpoint(&api_base_url(), path)
}

fn join_endpoint(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
