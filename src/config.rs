//! Application configuration
//!
//! Wasm has no runtime environment, so values are baked in at compile time
//! via `option_env!`, with the same defaults the deployed client ships with.

use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the SafeTrip REST API, no trailing slash.
    pub api_base_url: String,
    /// Client-wide request timeout in milliseconds.
    pub request_timeout_ms: u32,
}

impl AppConfig {
    fn load() -> Self {
        let api_base_url = option_env!("SAFETRIP_API_BASE_URL")
            .unwrap_or("http://localhost:8000")
            .trim_end_matches('/')
            .to_string();
        let request_timeout_ms = option_env!("SAFETRIP_API_TIMEOUT_MS")
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(10_000);
        Self {
            api_base_url,
            request_timeout_ms,
        }
    }

    pub fn get() -> &'static AppConfig {
        CONFIG.get_or_init(Self::load)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_env() {
        let config = AppConfig::get();
        assert!(!config.api_base_url.ends_with('/'));
        assert!(config.request_timeout_ms > 0);
    }
}
