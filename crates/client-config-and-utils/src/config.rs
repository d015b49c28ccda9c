//! Configuration management for the client.

use crate::{CoreError, CoreResult, Paths};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Default API base URL (can be overridden at compile time via WANASTI_API_URL env var).
pub const DEFAULT_API_BASE_URL: &str = match option_env!("WANASTI_API_URL") {
    Some(url) => url,
    None => "https://dev-api.wanasti.com/api/v1",
};

/// Default client auth header value (can be overridden at compile time via
/// WANASTI_API_AUTH_HEADER env var). Sent verbatim on every credential request.
pub const DEFAULT_API_AUTH_HEADER: &str = match option_env!("WANASTI_API_AUTH_HEADER") {
    Some(header) => header,
    None => "dAwMpo/TAWLhFrwwr3Wzcmc8XTdmAgp6zmGLsFmJ9HAnEbTQAg937i/hqKFjtFVQ4TnQ2y6xlVSeTKy3VWcxvalwvmPq6qF7+UcLd3wBXYoVQ2Puj49mTweKh/v2Rvj9zyVjfbexFkjMNZ5XyGucmdOI6XMmI98Zvu38Jh1fOo8157YxlgCozKkonixczjGIn3RKLuv7v3gXDRl4irzRcS6lYKGJB8vfA847GUppsVjdZV9bAjADfqUP2Iyl6Nz8MOWrSHNy8tWqhM6mI165rCwH3xMv7HEexmsMO7Mi36c=s",
};

/// Default locale sent as the `lang` query value on the login endpoint.
pub const DEFAULT_LANG: &str = "en";

/// Default currency sent as the `currencyCode` query value on the login endpoint.
pub const DEFAULT_CURRENCY_CODE: &str = "KW";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Main client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// API base URL.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Static client auth header value.
    #[serde(default = "default_api_auth_header")]
    pub api_auth_header: String,
    /// Locale for the login endpoint query.
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Currency for the login endpoint query.
    #[serde(default = "default_currency_code")]
    pub currency_code: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_api_auth_header() -> String {
    DEFAULT_API_AUTH_HEADER.to_string()
}

fn default_lang() -> String {
    DEFAULT_LANG.to_string()
}

fn default_currency_code() -> String {
    DEFAULT_CURRENCY_CODE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_auth_header: DEFAULT_API_AUTH_HEADER.to_string(),
            lang: DEFAULT_LANG.to_string(),
            currency_code: DEFAULT_CURRENCY_CODE.to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values, then override from environment.
    pub fn new() -> Self {
        let mut config = Self::default();
        config.load_from_env();
        config
    }

    /// Load configuration from a file, falling back to defaults.
    /// Note: api_base_url and api_auth_header are compile-time only and will
    /// always use the built-in defaults, regardless of what's in the config file.
    pub fn load(paths: &Paths) -> CoreResult<Self> {
        let config_path = paths.config_file();

        let mut config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            Self::default()
        };

        // Force compile-time values (never from config file)
        config.api_base_url = DEFAULT_API_BASE_URL.to_string();
        config.api_auth_header = DEFAULT_API_AUTH_HEADER.to_string();

        // Environment variables can only override log_level
        config.load_from_env();

        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save(&self, paths: &Paths) -> CoreResult<()> {
        paths.ensure_dirs()?;
        let config_path = paths.config_file();
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Override configuration from environment variables.
    /// Only log_level can be overridden at runtime.
    fn load_from_env(&mut self) {
        if let Ok(log_level) = std::env::var("WANASTI_LOG_LEVEL") {
            self.log_level = log_level;
        }
    }

    /// Get the API base URL as a parsed URL.
    pub fn api_base_url(&self) -> CoreResult<Url> {
        Url::parse(&self.api_base_url).map_err(CoreError::from)
    }

    /// Full login endpoint URL, parameterized by locale/currency query values.
    pub fn login_url(&self) -> String {
        format!(
            "{}/user/login?lang={}&currencyCode={}",
            self.api_base_url.trim_end_matches('/'),
            self.lang,
            self.currency_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.api_auth_header, DEFAULT_API_AUTH_HEADER);
        assert_eq!(config.lang, "en");
        assert_eq!(config.currency_code, "KW");
    }

    #[test]
    fn test_config_load_from_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.json");

        let config_json = r#"{
            "log_level": "debug"
        }"#;

        std::fs::write(&config_path, config_json).unwrap();

        let config = Config::load_from_file(&config_path).unwrap();
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_config_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let paths = Paths::with_base_dir(dir.path().to_path_buf());

        // Note: api_base_url and api_auth_header are compile-time only
        // and will be forced to defaults on load
        let mut config = Config::default();
        config.log_level = "trace".to_string();

        config.save(&paths).unwrap();

        let loaded = Config::load(&paths).unwrap();
        assert_eq!(loaded.log_level, "trace");
        assert_eq!(loaded.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_config_load_nonexistent_uses_defaults() {
        let dir = tempdir().unwrap();
        let paths = Paths::with_base_dir(dir.path().to_path_buf());

        let config = Config::load(&paths).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_config_api_base_url_parse() {
        let config = Config::default();
        let url = config.api_base_url().unwrap();
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn test_config_invalid_url() {
        let mut config = Config::default();
        config.api_base_url = "not a valid url".to_string();

        let result = config.api_base_url();
        assert!(result.is_err());
    }

    #[test]
    fn test_login_url_carries_locale_and_currency() {
        let mut config = Config::default();
        config.api_base_url = "https://api.example.com/api/v1".to_string();
        config.lang = "ar".to_string();
        config.currency_code = "SA".to_string();

        assert_eq!(
            config.login_url(),
            "https://api.example.com/api/v1/user/login?lang=ar&currencyCode=SA"
        );
    }

    #[test]
    fn test_login_url_trims_trailing_slash() {
        let mut config = Config::default();
        config.api_base_url = "https://api.example.com/api/v1/".to_string();

        assert_eq!(
            config.login_url(),
            "https://api.example.com/api/v1/user/login?lang=en&currencyCode=KW"
        );
    }
}
