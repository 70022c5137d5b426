// src/config.rs

use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "LODGE_CONFIG";
/// Looked up in the working directory when `LODGE_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "lodge.toml";

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Could not read config: {msg}"),
            ConfigError::Parse(msg) => write!(f, "Could not parse config: {msg}"),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// One managed property and the feed its bookings come from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertySource {
    /// Display name, also the key manual sheet rows are matched on.
    pub name: String,
    #[serde(default)]
    pub ical_url: Option<String>,
}

impl PropertySource {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ical_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Length of the rolling window, starting today.
    pub window_days: usize,
    /// 0 turns the source cache off.
    pub cache_ttl_secs: u64,
    pub request_timeout_secs: u64,
    /// Case-insensitive substrings of a feed summary marking a block.
    pub blocked_keywords: Vec<String>,
    pub manual_bookings_url: Option<String>,
    pub notes_url: Option<String>,
    /// Ordered; flags and changeover details follow this order.
    pub properties: Vec<PropertySource>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            window_days: 60,
            cache_ttl_secs: 300,
            request_timeout_secs: 30,
            blocked_keywords: vec!["blocked".to_string(), "not available".to_string()],
            manual_bookings_url: None,
            notes_url: None,
            properties: vec![
                PropertySource::new("Hart Lodge"),
                PropertySource::new("Hare Lodge"),
            ],
        }
    }
}

impl Settings {
    /// Resolve settings the way the binary does at startup:
    /// `LODGE_CONFIG` if set, else `lodge.toml` if present, else defaults.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::from_file(&path);
        }

        if Path::new(DEFAULT_CONFIG_PATH).exists() {
            return Self::from_file(DEFAULT_CONFIG_PATH);
        }

        log::info!("No {DEFAULT_CONFIG_PATH} found, using built-in defaults");
        let settings = Self::default();
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Io(format!("{path}: {e}")))?;
        let settings = Self::from_toml(&text)?;
        log::info!("Loaded config from {path}");
        Ok(settings)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let settings: Settings =
            toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_days == 0 {
            return Err(ConfigError::Invalid("window_days must be at least 1".into()));
        }
        if self.max_workers == 0 {
            return Err(ConfigError::Invalid("max_workers must be at least 1".into()));
        }
        if self.properties.is_empty() {
            return Err(ConfigError::Invalid("at least one property is required".into()));
        }

        let mut seen = HashSet::new();
        for property in &self.properties {
            let name = property.name.trim();
            if name.is_empty() {
                return Err(ConfigError::Invalid("property name must not be empty".into()));
            }
            if !seen.insert(name) {
                return Err(ConfigError::Invalid(format!("duplicate property '{name}'")));
            }
            if let Some(url) = &property.ical_url {
                check_url(url)?;
            }
        }

        for url in [&self.manual_bookings_url, &self.notes_url].into_iter().flatten() {
            check_url(url)?;
        }

        Ok(())
    }

    pub fn property_names(&self) -> Vec<String> {
        self.properties.iter().map(|p| p.name.trim().to_string()).collect()
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn check_url(raw: &str) -> Result<(), ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::Invalid(format!("bad url '{raw}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::Invalid(format!(
            "unsupported scheme '{other}' in '{raw}'"
        ))),
    }
}
