//! Client configuration resolved from build-time environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! A WASM bundle has no process environment at runtime, so settings are baked
//! in with `option_env!` when the crate is compiled:
//!
//! - `CATEGORY_API_BASE_URL`: REST API origin (default `https://mock-api.arikmpt.com`)
//! - `CATEGORY_LOG_LEVEL`: `error`, `warn`, `info` (default), `debug`, or `trace`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "https://mock-api.arikmpt.com";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), log_level: DEFAULT_LOG_LEVEL }
    }
}

impl AppConfig {
    /// Build config from the values captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("CATEGORY_API_BASE_URL"), option_env!("CATEGORY_LOG_LEVEL"))
    }

    /// Build config from raw optional values.
    ///
    /// Blank values fall back to defaults; an unrecognized log level falls
    /// back to `info`.
    pub fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let log_level = parse_log_level(log_level).unwrap_or(DEFAULT_LOG_LEVEL);
        Self { api_base_url, log_level }
    }

    /// Join an API path such as `/api/category` onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

fn parse_log_level(raw: Option<&str>) -> Option<log::Level> {
    match raw?.trim().to_ascii_lowercase().as_str() {
        "error" => Some(log::Level::Error),
        "warn" | "warning" => Some(log::Level::Warn),
        "info" => Some(log::Level::Info),
        "debug" => Some(log::Level::Debug),
        "trace" => Some(log::Level::Trace),
        _ => None,
    }
}
