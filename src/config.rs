/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub dispatcher: DispatcherConfig,
    pub elevator: ElevatorConfig,
    pub generator: GeneratorConfig,
    pub monitor: MonitorConfig,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DispatcherConfig {
    pub n_floors: u8,
    pub n_elevators: u8,
}

/// Timings in milliseconds.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ElevatorConfig {
    pub travel_time: u64,
    pub dwell_time: u64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub enabled: bool,
    pub min_interval: u64,
    pub max_interval: u64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MonitorConfig {
    pub enabled: bool,
    pub interval: u64,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        DispatcherConfig {
            n_floors: 6,
            n_elevators: 2,
        }
    }
}

impl Default for ElevatorConfig {
    fn default() -> Self {
        ElevatorConfig {
            travel_time: 500,
            dwell_time: 1000,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            enabled: true,
            min_interval: 400,
            max_interval: 2900,
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        MonitorConfig {
            enabled: true,
            interval: 100,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/***************************************/
/*             Public API              */
/***************************************/

/// Loads the configuration from `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        log::warn!("{} not found, using default configuration", path.display());
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(path)?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(config_str)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dispatcher.n_floors == 0 {
            return Err(ConfigError::Invalid("n_floors must be at least 1".into()));
        }
        if self.dispatcher.n_elevators == 0 {
            return Err(ConfigError::Invalid("n_elevators must be at least 1".into()));
        }
        if self.generator.min_interval > self.generator.max_interval {
            return Err(ConfigError::Invalid(format!(
                "generator min_interval ({}) exceeds max_interval ({})",
                self.generator.min_interval, self.generator.max_interval
            )));
        }
        Ok(())
    }
}
