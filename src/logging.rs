//! log4rs initialisation.
//!
//! A `log4rs.yml` file wins when present. Otherwise logs go to the Splunk log
//! directory if `SPLUNK_HOME` is set, or to stderr. Never to stdout, which
//! carries the CSV.

use crate::config::Config;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::append::Append;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l} {t} {m}{n}";

pub fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    if config.log_config.exists() {
        log4rs::init_file(&config.log_config, Default::default())?;
        log::debug!("logging configured from {}", config.log_config.display());
        return Ok(());
    }
    log4rs::init_config(build_log_config(config)?)?;
    Ok(())
}

/// Programmatic configuration used when no YAML file is present.
pub fn build_log_config(config: &Config) -> Result<log4rs::Config, Box<dyn Error>> {
    let encoder = Box::new(PatternEncoder::new(LOG_PATTERN));
    let appender: Box<dyn Append> = match config.splunk_log_file() {
        Some(path) => Box::new(FileAppender::builder().encoder(encoder).build(path)?),
        None => Box::new(
            ConsoleAppender::builder()
                .encoder(encoder)
                .target(Target::Stderr)
                .build(),
        ),
    };

    let log_config = log4rs::Config::builder()
        .appender(Appender::builder().build("main", appender))
        .build(Root::builder().appender("main").build(LevelFilter::Info))?;
    Ok(log_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_stderr_config() {
        let config = Config::default();
        let log_config = build_log_config(&config).expect("stderr config should build");
        assert_eq!(log_config.root().level(), LevelFilter::Info);
        assert_eq!(log_config.appenders().len(), 1);
    }

    #[test]
    fn test_build_splunk_config() {
        let home = std::env::temp_dir().join(format!("rirstats-log-{}", std::process::id()));
        let config = Config {
            splunk_home: Some(home.clone()),
            ..Config::default()
        };
        build_log_config(&config).expect("file config should build");
        assert!(home.join("var/log/splunk/rirstats.log").exists());
        std::fs::remove_dir_all(&home).ok();
    }
}
