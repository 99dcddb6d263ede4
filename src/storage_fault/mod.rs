// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Detection of miners that failed to submit a proof of spacetime on time.
//!
//! Every node observing the same chain must reach the same verdicts, so
//! detection only depends on the head, its ancestry and the proving schedule
//! reported by a [`PeriodOracle`].

mod config;
mod errors;
mod lookback;
mod monitor;
mod oracle;
mod types;

pub use config::{LookbackStrategy, MonitorConfig};
pub use errors::Error;
pub use lookback::{lookback, lookback_cancellable};
pub use monitor::{ScanReport, StorageFaultMonitor};
pub use oracle::{PeriodOracle, PeriodSnapshot, ProvingPeriod, StaticPeriodOracle};
pub use types::{FaultKind, FaultSet, StorageFault};
