// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use tracing::level_filters::LevelFilter;

use crate::storage_fault::MonitorConfig;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct LogLevelFilter(pub LevelFilter);

impl Serialize for LogLevelFilter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string().to_uppercase())
    }
}

impl<'de> Deserialize<'de> for LogLevelFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        // Case insensitive.
        LevelFilter::from_str(&s)
            .map(LogLevelFilter)
            .map_err(|_| D::Error::custom(format!("unknown log level filter `{s}`")))
    }
}

impl fmt::Display for LogLevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct LogConfig {
    pub filters: Vec<LogValue>,
}

impl LogConfig {
    pub(in crate::cli_shared) fn to_filter_string(&self) -> String {
        self.filters
            .iter()
            .map(|f| format!("{}={}", f.module, f.level))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filters: vec![LogValue::new(
                "storage_consensus::storage_fault",
                LogLevelFilter(LevelFilter::INFO),
            )],
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct LogValue {
    pub module: String,
    pub level: LogLevelFilter,
}

impl LogValue {
    pub fn new(module: &str, level: LogLevelFilter) -> Self {
        Self {
            module: module.to_string(),
            level,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Default, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub monitor: MonitorConfig,
    pub log: LogConfig,
}

#[cfg(test)]
mod test {
    use tracing_subscriber::EnvFilter;

    use super::*;
    use crate::storage_fault::LookbackStrategy;

    #[test]
    fn test_config_all_params_under_section() {
        let serialized_config =
            toml::to_string(&Config::default()).expect("could not serialize the configuration");
        assert_eq!(
            serialized_config
                .trim_start()
                .chars()
                .next()
                .expect("configuration empty"),
            '['
        )
    }

    #[test]
    fn test_default_log_filters() {
        let config = LogConfig::default();
        EnvFilter::builder()
            .parse(config.to_filter_string())
            .unwrap();
    }

    #[test]
    fn test_lookback_strategy_from_toml() {
        let config: Config = toml::from_str(
            r#"
            [monitor]
            lookback = "cursor-per-message"

            [log]
            filters = [{ module = "storage_consensus", level = "debug" }]
            "#,
        )
        .unwrap();
        assert_eq!(config.monitor.lookback, LookbackStrategy::CursorPerMessage);
        assert_eq!(config.log.filters[0].level, LogLevelFilter(LevelFilter::DEBUG));
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let result: Result<Config, _> = toml::from_str(
            r#"
            [log]
            filters = [{ module = "storage_consensus", level = "loud" }]
            "#,
        );
        assert!(result.is_err());
    }
}
