// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::{ffi::OsString, path::PathBuf};

use anyhow::Context as _;
use clap::Parser as _;

use super::fixture::{ChainFixture, FaultRecord};
use crate::chain::ChainCursor;
use crate::cli_shared::{logger::setup_logger, read_config};
use crate::shim::address::Address;
use crate::storage_fault::{LookbackStrategy, MonitorConfig, ScanReport, StorageFaultMonitor};
use crate::utils::io::read_json_file;

/// Scan the head of a chain fixture for storage faults
#[derive(Debug, clap::Parser)]
#[command(name = "forest-fault-scan", version)]
pub struct Cli {
    /// JSON file listing tipsets from genesis to head and the proving schedule
    pub chain: PathBuf,
    /// Miner whose proving schedule applies to the scan
    #[arg(long)]
    pub miner: Address,
    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Overrides the configured lookback strategy (`shared-cursor` or
    /// `cursor-per-message`)
    #[arg(long)]
    pub lookback: Option<LookbackStrategy>,
}

pub fn main<ArgT>(args: impl IntoIterator<Item = ArgT>) -> anyhow::Result<()>
where
    ArgT: Into<OsString> + Clone,
{
    // Capture Cli inputs
    let Cli {
        chain,
        miner,
        config,
        lookback,
    } = Cli::parse_from(args);
    let mut config = read_config(config.as_deref())?;
    if let Some(lookback) = lookback {
        config.monitor.lookback = lookback;
    }
    setup_logger(&config.log);

    let fixture: ChainFixture = read_json_file(&chain)?;
    let report = scan_fixture(&fixture, miner, config.monitor)?;

    let records = report.faults.iter().map(FaultRecord::from).collect::<Vec<_>>();
    println!("{}", serde_json::to_string_pretty(&records)?);
    match report.error {
        Some(e) => Err(e).context("scan aborted, faults above are partial"),
        None => Ok(()),
    }
}

pub(super) fn scan_fixture(
    fixture: &ChainFixture,
    miner: Address,
    config: MonitorConfig,
) -> anyhow::Result<ScanReport> {
    let (db, head) = fixture.build()?;
    tracing::info!(%miner, height = %head.height(), tipsets = db.len(), "scanning head");
    let monitor = StorageFaultMonitor::with_config(miner, fixture.schedule, config);
    let mut cursor = ChainCursor::new(db, head.clone());
    Ok(monitor.scan(&mut cursor, &head))
}
