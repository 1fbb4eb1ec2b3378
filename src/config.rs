//! Configuration management

use serde::Deserialize;
use std::path::Path;

use crate::error::{PulseError, Result};

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Google News RSS search endpoint
    pub news_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User agent sent with feed requests
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Default number of news items per analysis
    pub news_limit: usize,
    /// Default number of social posts per analysis
    pub social_limit: usize,
    /// Hard cap on any per-provider limit
    pub max_limit: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            news_url: "https://news.google.com/rss/search".to_string(),
            timeout_secs: 10,
            user_agent: "sentiment-pulse/0.1".to_string(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            news_limit: 20,
            social_limit: 10,
            max_limit: 100,
        }
    }
}

impl Config {
    /// Load configuration from a file, layered with environment overrides
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_str().ok_or_else(|| {
            PulseError::Config("config path is not valid UTF-8".to_string())
        })?;

        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(
                config::Environment::with_prefix("SENTIMENT_PULSE").separator("__"),
            )
            .build()
            .map_err(|e| PulseError::Config(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| PulseError::Config(e.to_string()))
    }

    /// Load from default locations, falling back to built-in defaults
    /// when no config file exists. The tool stays usable out of the box.
    pub fn load_default() -> Result<Self> {
        let paths = ["config.toml", "~/.config/sentiment-pulse/config.toml"];

        for path in paths {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                return Self::load(expanded.as_ref());
            }
        }

        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.limits.news_limit, 20);
        assert_eq!(config.limits.max_limit, 100);
        assert_eq!(config.fetch.timeout_secs, 10);
        assert!(config.fetch.news_url.contains("news.google.com"));
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let err = Config::load("/nonexistent/sentiment-pulse/config").unwrap_err();
        assert!(matches!(err, PulseError::Config(_)));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let parsed: Config = toml::from_str(
            r#"
            [limits]
            news_limit = 5
            "#,
        )
        .unwrap();
        assert_eq!(parsed.limits.news_limit, 5);
        assert_eq!(parsed.limits.social_limit, 10);
        assert_eq!(parsed.fetch.timeout_secs, 10);
    }
}
