// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

mod config;

pub use config::{Config, LogConfig, LogLevelFilter, LogValue};
