// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::{
    Error, FaultKind, LookbackStrategy, MonitorConfig, PeriodOracle, PeriodSnapshot,
    StorageFault, lookback::lookback_cancellable,
};
use crate::blocks::Tipset;
use crate::chain::AncestorCursor;
use crate::message::ChainMessage;
use crate::shim::{address::Address, clock::BlockHeight};

/// Outcome of one scan. A scan that hits an error keeps the faults it found
/// before the error.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub faults: Vec<StorageFault>,
    pub error: Option<Error>,
}

impl ScanReport {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Drops the partial faults if the scan failed.
    pub fn into_result(self) -> Result<Vec<StorageFault>, Error> {
        match self.error {
            None => Ok(self.faults),
            Some(e) => Err(e),
        }
    }
}

/// Checks each new head for storage faults, a.k.a. market faults. Storage
/// faults are distinct from consensus faults.
///
/// One monitor is created per monitored miner and called once per adopted
/// head. It holds no per-scan state, so replaying a head against any monitor
/// yields the same faults.
#[derive(Debug, Clone)]
pub struct StorageFaultMonitor<O> {
    miner: Address,
    oracle: O,
    config: MonitorConfig,
}

impl<O: PeriodOracle> StorageFaultMonitor<O> {
    pub fn new(miner: Address, oracle: O) -> Self {
        Self::with_config(miner, oracle, MonitorConfig::default())
    }

    pub fn with_config(miner: Address, oracle: O, config: MonitorConfig) -> Self {
        Self {
            miner,
            oracle,
            config,
        }
    }

    pub fn miner(&self) -> &Address {
        &self.miner
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Scans the `submitPost` messages of `head` for storage faults.
    /// `cursor` must be positioned at `head` and not yet advanced.
    pub fn scan<C>(&self, cursor: &mut C, head: &Tipset) -> ScanReport
    where
        C: AncestorCursor + Clone,
    {
        self.scan_inner(cursor, head, None)
    }

    /// Same as [`Self::scan`], checking `cancel` before every cursor advance.
    pub fn scan_with_cancellation<C>(
        &self,
        cursor: &mut C,
        head: &Tipset,
        cancel: &CancellationToken,
    ) -> ScanReport
    where
        C: AncestorCursor + Clone,
    {
        self.scan_inner(cursor, head, Some(cancel))
    }

    fn scan_inner<C>(
        &self,
        cursor: &mut C,
        head: &Tipset,
        cancel: Option<&CancellationToken>,
    ) -> ScanReport
    where
        C: AncestorCursor + Clone,
    {
        let mut faults = vec![];
        let error = self.detect(cursor, head, cancel, &mut faults).err();
        if let Some(e) = &error {
            warn!(
                miner = %self.miner,
                height = %head.height(),
                faults = faults.len(),
                "storage fault scan aborted: {e}"
            );
        }
        ScanReport { faults, error }
    }

    fn detect<C>(
        &self,
        cursor: &mut C,
        head: &Tipset,
        cancel: Option<&CancellationToken>,
        faults: &mut Vec<StorageFault>,
    ) -> Result<(), Error>
    where
        C: AncestorCursor + Clone,
    {
        if cursor.value().map(Tipset::key) != Some(head.key()) {
            return Err(Error::CursorNotAtHead {
                head: head.key().clone(),
            });
        }
        let height = head.height();
        let snapshot = PeriodSnapshot::fetch(&self.oracle, head, &self.miner)?;
        let pristine = match self.config.lookback {
            LookbackStrategy::SharedCursor => None,
            LookbackStrategy::CursorPerMessage => Some(cursor.clone()),
        };

        for block in head.blocks() {
            for msg in block.messages().iter().filter(|m| m.is_submit_post()) {
                let code = match &pristine {
                    None => classify(msg, height, &snapshot, &mut *cursor, cancel)?,
                    Some(pristine) => {
                        classify(msg, height, &snapshot, &mut pristine.clone(), cancel)?
                    }
                };
                if let Some(code) = code {
                    debug!(miner = %msg.from, %height, block = %block.cid(), %code, "storage fault");
                    faults.push(StorageFault {
                        code,
                        miner: msg.from,
                        block: *block.cid(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Judges one `submitPost` message of a head at `height`. Empty proofs are
/// judged without looking at the ancestry. Otherwise the cursor is searched
/// for the proving period and then, continuing from where that search
/// stopped, for the generation attack threshold.
fn classify<C: AncestorCursor + ?Sized>(
    msg: &ChainMessage,
    height: BlockHeight,
    snapshot: &PeriodSnapshot,
    cursor: &mut C,
    cancel: Option<&CancellationToken>,
) -> Result<Option<FaultKind>, Error> {
    if msg.proof_count() == 0 {
        return Ok(Some(FaultKind::EmptyProofs));
    }
    let limit = snapshot.proving_period.late_submission_limit(height)?;
    if lookback_cancellable(&msg.from, cursor, limit, cancel)?.is_some() {
        return Ok(None);
    }
    let late = lookback_cancellable(
        &msg.from,
        cursor,
        snapshot.generation_attack_threshold,
        cancel,
    )?;
    Ok(Some(match late {
        Some(_) => FaultKind::LateSubmission,
        None => FaultKind::AfterGenerationAttackThreshold,
    }))
}
