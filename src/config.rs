//! Runtime configuration.
//!
//! Defaults cover a normal run; environment variables (optionally loaded from
//! `.env`) override them.

use crate::error::RirError;
use std::path::PathBuf;
use std::time::Duration;

/// Extended delegation statistics, one file per registry.
pub const RIRSTATS_URLS: [&str; 5] = [
    "http://ftp.afrinic.net/stats/afrinic/delegated-afrinic-extended-latest",
    "http://ftp.apnic.net/stats/apnic/delegated-apnic-extended-latest",
    "http://ftp.arin.net/pub/stats/arin/delegated-arin-extended-latest",
    "http://ftp.lacnic.net/pub/stats/lacnic/delegated-lacnic-extended-latest",
    "http://ftp.ripe.net/pub/stats/ripencc/delegated-ripencc-extended-latest",
];

pub const LOG_CONFIG_FILE: &str = "log4rs.yml";
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

pub const ENV_SOURCES: &str = "RIRSTATS_SOURCES";
pub const ENV_LOG_CONFIG: &str = "RIRSTATS_LOG_CONFIG";
pub const ENV_TIMEOUT_SECS: &str = "RIRSTATS_TIMEOUT_SECS";
pub const ENV_SPLUNK_HOME: &str = "SPLUNK_HOME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Source URLs, processed in this order.
    pub sources: Vec<String>,
    /// log4rs YAML file, used when it exists.
    pub log_config: PathBuf,
    /// When set, logs go to `$SPLUNK_HOME/var/log/splunk/rirstats.log`.
    pub splunk_home: Option<PathBuf>,
    /// Per-request HTTP timeout.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sources: RIRSTATS_URLS.iter().map(|s| s.to_string()).collect(),
            log_config: PathBuf::from(LOG_CONFIG_FILE),
            splunk_home: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Config, RirError> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, RirError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(sources) = lookup(ENV_SOURCES) {
            config.sources = sources
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if config.sources.is_empty() {
                return Err(RirError::Config(format!("{ENV_SOURCES} lists no URLs")));
            }
        }
        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            config.log_config = PathBuf::from(path);
        }
        config.splunk_home = lookup(ENV_SPLUNK_HOME)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                RirError::Config(format!("{ENV_TIMEOUT_SECS} is not a number: '{secs}'"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Log file used when running under Splunk.
    pub fn splunk_log_file(&self) -> Option<PathBuf> {
        self.splunk_home.as_ref().map(|home| {
            home.join("var")
                .join("log")
                .join("splunk")
                .join("rirstats.log")
        })
    }
}
