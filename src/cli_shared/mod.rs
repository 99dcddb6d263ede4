// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

pub mod cli;
pub mod logger;

use std::path::Path;

use anyhow::Context as _;

use crate::cli_shared::cli::Config;
use crate::utils::io::read_toml;

/// Reads the configuration file at `config_path`, or returns the defaults if
/// no path is given.
pub fn read_config(config_path: Option<&Path>) -> anyhow::Result<Config> {
    match config_path {
        Some(path) => {
            let toml = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            read_toml(&toml).with_context(|| format!("invalid config file {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage_fault::LookbackStrategy;

    #[test]
    fn read_config_default() {
        let config = read_config(None).unwrap();
        assert_eq!(config.monitor.lookback, LookbackStrategy::SharedCursor);
    }

    #[test]
    fn read_config_with_path() {
        let mut default_config = Config::default();
        default_config.monitor.lookback = LookbackStrategy::CursorPerMessage;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, toml::to_string(&default_config).unwrap()).unwrap();

        let config = read_config(Some(path.as_path())).unwrap();

        assert_eq!(config, default_config);
    }

    #[test]
    fn read_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_config(Some(dir.path().join("missing.toml").as_path())).is_err());
    }
}
