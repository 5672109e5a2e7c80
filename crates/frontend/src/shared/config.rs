//! Application configuration
//!
//! Defaults are embedded as TOML; a few values can be overridden at build
//! time through environment variables:
//!
//! - `CATALOG_API_BASE` - full API base URL, e.g. `https://api.example.com/api`
//! - `CATALOG_SEARCH_DEBOUNCE_MS` - search input debounce
//! - `CATALOG_LOG_LEVEL` - `error` | `warn` | `info` | `debug` | `trace`

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub search: SearchConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Explicit base URL. When absent it is derived from the page location.
    #[serde(default)]
    pub base_url: Option<String>,
    pub port: u16,
    pub path_prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SearchConfig {
    pub debounce_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 5000
path_prefix = "/api"

[search]
debounce_ms = 300

[logging]
level = "debug"
"#;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: None,
                port: 5000,
                path_prefix: "/api".to_string(),
            },
            search: SearchConfig { debounce_ms: 300 },
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
        }
    }
}

/// Load the embedded configuration and apply build-time overrides
pub fn load_config() -> Result<AppConfig, toml::de::Error> {
    let mut config: AppConfig = toml::from_str(DEFAULT_CONFIG)?;
    config.apply_overrides(
        option_env!("CATALOG_API_BASE"),
        option_env!("CATALOG_SEARCH_DEBOUNCE_MS"),
        option_env!("CATALOG_LOG_LEVEL"),
    );
    Ok(config)
}

impl AppConfig {
    fn apply_overrides(
        &mut self,
        api_base: Option<&str>,
        debounce_ms: Option<&str>,
        log_level: Option<&str>,
    ) {
        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            self.api.base_url = Some(base.to_string());
        }
        // unparsable values keep the default
        if let Some(ms) = debounce_ms.and_then(|v| v.trim().parse().ok()) {
            self.search.debounce_ms = ms;
        }
        if let Some(level) = log_level.map(str::trim).filter(|l| !l.is_empty()) {
            self.logging.level = level.to_string();
        }
    }

    /// Base URL for API requests, without a trailing slash
    pub fn api_base(&self) -> String {
        let location = web_sys::window().and_then(|w| {
            let location = w.location();
            Some((location.protocol().ok()?, location.hostname().ok()?))
        });
        self.resolve_api_base(location)
    }

    /// `location` is the page's `(protocol, hostname)`, e.g. `("https:", "example.com")`
    fn resolve_api_base(&self, location: Option<(String, String)>) -> String {
        if let Some(base) = &self.api.base_url {
            return base.trim_end_matches('/').to_string();
        }
        let (protocol, hostname) =
            location.unwrap_or_else(|| ("http:".to_string(), "127.0.0.1".to_string()));
        format!(
            "{}//{}:{}{}",
            protocol,
            hostname,
            self.api.port,
            self.api.path_prefix.trim_end_matches('/')
        )
    }

    pub fn log_level(&self) -> log::Level {
        self.logging.level.parse().unwrap_or(log::Level::Debug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: AppConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_api_base_from_location() {
        let config = AppConfig::default();
        assert_eq!(
            config.resolve_api_base(Some(("https:".to_string(), "admin.local".to_string()))),
            "https://admin.local:5000/api"
        );
        assert_eq!(config.resolve_api_base(None), "http://127.0.0.1:5000/api");
    }

    #[test]
    fn test_explicit_base_wins() {
        let mut config = AppConfig::default();
        config.apply_overrides(Some("http://localhost:5000/api/"), None, None);
        assert_eq!(
            config.resolve_api_base(Some(("https:".to_string(), "ignored".to_string()))),
            "http://localhost:5000/api"
        );
    }

    #[test]
    fn test_overrides() {
        let mut config = AppConfig::default();
        config.apply_overrides(None, Some("150"), Some("warn"));
        assert_eq!(config.search.debounce_ms, 150);
        assert_eq!(config.log_level(), log::Level::Warn);

        config.apply_overrides(Some("  "), Some("soon"), Some(""));
        assert_eq!(config.api.base_url, None);
        assert_eq!(config.search.debounce_ms, 150);
        assert_eq!(config.log_level(), log::Level::Warn);
    }

    #[test]
    fn test_bad_level_falls_back_to_debug() {
        let mut config = AppConfig::default();
        config.logging.level = "chatty".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
