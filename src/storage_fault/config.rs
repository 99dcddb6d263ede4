// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use serde::{Deserialize, Serialize};

/// How lookback searches for different messages of one head relate to each
/// other.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LookbackStrategy {
    /// Every search continues the single cursor handed to the scan. Each
    /// message only sees the ancestry the previous searches left unvisited,
    /// so a head is scanned in one pass over its ancestry.
    #[default]
    SharedCursor,
    /// Every message searches from the head with a fresh copy of the cursor.
    /// The caller's cursor is not advanced.
    CursorPerMessage,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub lookback: LookbackStrategy,
}
