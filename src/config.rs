use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub scholar: ScholarConfig,
    pub selectors: SelectorsConfig,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ScholarConfig {
    pub endpoint: String,
    /// Sent as the `hl` query parameter.
    pub locale: String,
    pub user_agent: String,
    /// Covers the whole request, from connecting until the body is read.
    pub timeout_secs: f64,
    pub max_results: usize,
    /// Label put in the `source` field of every result.
    pub source: String,
}

/// CSS selectors for the parts of a results page we care about. Everything
/// except `result` is evaluated relative to a single result block, and `href`
/// is evaluated relative to the title.
#[derive(Deserialize, Clone, Debug)]
pub struct SelectorsConfig {
    pub result: String,
    pub title: String,
    pub href: String,
    pub snippet: String,
    pub byline: String,
}

impl Config {
    /// The config that ships inside the binary.
    pub fn base() -> eyre::Result<Self> {
        let base_config_str = include_str!("../config-base.toml");
        let config = Self::from_toml(base_config_str)?;
        debug!(?config, "loaded base config");
        Ok(config)
    }

    pub fn from_toml(s: &str) -> eyre::Result<Self> {
        let config: Config = toml::from_str(s)?;
        if !config.scholar.timeout_secs.is_finite() || config.scholar.timeout_secs <= 0. {
            eyre::bail!(
                "timeout_secs must be a positive number, got {}",
                config.scholar.timeout_secs
            );
        }
        Ok(config)
    }
}

impl ScholarConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs_f64(self.timeout_secs)
    }
}
