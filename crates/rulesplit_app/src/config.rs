//! RON configuration file for the `rulesplit` binary.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::TimeDelta;
use rulesplit_engine::{FetchSettings, PipelineSettings};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_SOURCES: &[&str] = &[
    "https://easylist.to/easylist/easylist.txt",
    "https://easylist.to/easylist/easyprivacy.txt",
    "https://secure.fanboy.co.nz/fanboy-annoyance.txt",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub redirect_limit: usize,
    pub max_bytes: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        let defaults = FetchSettings::default();
        Self {
            connect_timeout_secs: defaults.connect_timeout.as_secs(),
            request_timeout_secs: defaults.request_timeout.as_secs(),
            redirect_limit: defaults.redirect_limit,
            max_bytes: defaults.max_bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sources: Vec<String>,
    pub base_name: String,
    pub cache_dir: PathBuf,
    pub output_dir: PathBuf,
    pub raw_cache_name: String,
    pub normalized_cache_name: String,
    pub freshness_hours: u32,
    pub courtesy_delay_ms: u64,
    pub fetch: FetchConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let pipeline = PipelineSettings::default();
        Self {
            sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
            base_name: "adblock".to_string(),
            cache_dir: PathBuf::from("cache"),
            output_dir: PathBuf::from("output"),
            raw_cache_name: pipeline.raw_cache,
            normalized_cache_name: pipeline.normalized_cache,
            freshness_hours: 12,
            courtesy_delay_ms: 1000,
            fetch: FetchConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sources.is_empty() {
            return Err(ConfigError::Invalid("at least one source is required".into()));
        }
        if let Some(blank) = self.sources.iter().find(|s| s.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!("blank source entry {blank:?}")));
        }
        for (field, value) in [
            ("base_name", &self.base_name),
            ("raw_cache_name", &self.raw_cache_name),
            ("normalized_cache_name", &self.normalized_cache_name),
        ] {
            if value.is_empty() || value.contains(['/', '\\']) {
                return Err(ConfigError::Invalid(format!(
                    "{field} must be a plain, non-empty file name (got {value:?})"
                )));
            }
        }
        if self.raw_cache_name == self.normalized_cache_name {
            return Err(ConfigError::Invalid(
                "raw and normalized cache names must differ".into(),
            ));
        }
        if self.freshness_hours == 0 {
            return Err(ConfigError::Invalid("freshness_hours must be positive".into()));
        }
        for (field, secs) in [
            ("fetch.connect_timeout_secs", self.fetch.connect_timeout_secs),
            ("fetch.request_timeout_secs", self.fetch.request_timeout_secs),
        ] {
            if secs == 0 {
                return Err(ConfigError::Invalid(format!("{field} must be positive")));
            }
        }
        Ok(())
    }

    pub fn pipeline_settings(&self) -> PipelineSettings {
        PipelineSettings {
            raw_cache: self.raw_cache_name.clone(),
            normalized_cache: self.normalized_cache_name.clone(),
            window: TimeDelta::hours(i64::from(self.freshness_hours)),
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_secs(self.fetch.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.fetch.request_timeout_secs),
            redirect_limit: self.fetch.redirect_limit,
            max_bytes: self.fetch.max_bytes,
            ..FetchSettings::default()
        }
    }

    pub fn courtesy_delay(&self) -> Duration {
        Duration::from_millis(self.courtesy_delay_ms)
    }

    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::new())
    }
}

pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content, path)
}

fn parse_config(content: &str, path: &Path) -> Result<AppConfig, ConfigError> {
    ron::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
