use std::{fs::read_to_string, io::Error as IoError, path::Path};

use clap::ValueEnum;
use serde::Deserialize;
use serde_json::Error as SerdeJsonError;
use thiserror::Error as ThisError;
use time::Weekday;

/// isoweek.json
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `to-date` で曜日を省略したときの曜日。
    pub default_weekday: ConfigWeekday,

    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigWeekday {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<ConfigWeekday> for Weekday {
    fn from(value: ConfigWeekday) -> Weekday {
        match value {
            ConfigWeekday::Monday => Weekday::Monday,
            ConfigWeekday::Tuesday => Weekday::Tuesday,
            ConfigWeekday::Wednesday => Weekday::Wednesday,
            ConfigWeekday::Thursday => Weekday::Thursday,
            ConfigWeekday::Friday => Weekday::Friday,
            ConfigWeekday::Saturday => Weekday::Saturday,
            ConfigWeekday::Sunday => Weekday::Sunday,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let config_str = read_to_string(path).map_err(ConfigError::Io)?;
    let config = serde_json::from_str(&config_str).map_err(ConfigError::Serialization)?;
    Ok(config)
}

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(IoError),

    #[error("serialization error: {0}")]
    Serialization(SerdeJsonError),
}
