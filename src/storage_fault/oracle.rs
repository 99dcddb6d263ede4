// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Error;
use crate::blocks::Tipset;
use crate::shim::{
    address::Address,
    clock::{BlockHeight, HeightDelta, HeightUnderflow},
};

/// Half-open height window `[start, end)` in which a miner must submit a
/// PoSt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvingPeriod {
    pub start: BlockHeight,
    pub end: BlockHeight,
}

impl ProvingPeriod {
    pub fn new(start: u64, end: u64) -> Self {
        Self {
            start: BlockHeight::new(start),
            end: BlockHeight::new(end),
        }
    }

    /// Number of tipsets behind `head` to search before a submission counts
    /// as late.
    pub fn late_submission_limit(&self, head: BlockHeight) -> Result<HeightDelta, HeightUnderflow> {
        head.delta_since(self.start)
    }
}

/// Source of per-miner proving schedules. Both lookups may block and may
/// fail; neither is retried.
pub trait PeriodOracle {
    fn proving_period(&self, head: &Tipset, miner: &Address) -> anyhow::Result<ProvingPeriod>;

    fn generation_attack_threshold(
        &self,
        head: &Tipset,
        miner: &Address,
    ) -> anyhow::Result<HeightDelta>;
}

impl<T: PeriodOracle + ?Sized> PeriodOracle for &T {
    fn proving_period(&self, head: &Tipset, miner: &Address) -> anyhow::Result<ProvingPeriod> {
        (**self).proving_period(head, miner)
    }

    fn generation_attack_threshold(
        &self,
        head: &Tipset,
        miner: &Address,
    ) -> anyhow::Result<HeightDelta> {
        (**self).generation_attack_threshold(head, miner)
    }
}

impl<T: PeriodOracle + ?Sized> PeriodOracle for Arc<T> {
    fn proving_period(&self, head: &Tipset, miner: &Address) -> anyhow::Result<ProvingPeriod> {
        (**self).proving_period(head, miner)
    }

    fn generation_attack_threshold(
        &self,
        head: &Tipset,
        miner: &Address,
    ) -> anyhow::Result<HeightDelta> {
        (**self).generation_attack_threshold(head, miner)
    }
}

/// Proving schedule of one miner as seen from one head. Fetched at the start
/// of every scan and dropped at its end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeriodSnapshot {
    pub proving_period: ProvingPeriod,
    pub generation_attack_threshold: HeightDelta,
}

impl PeriodSnapshot {
    pub fn fetch(
        oracle: &impl PeriodOracle,
        head: &Tipset,
        miner: &Address,
    ) -> Result<Self, Error> {
        let proving_period =
            oracle
                .proving_period(head, miner)
                .map_err(|source| Error::ProvingPeriodFetch {
                    miner: *miner,
                    source,
                })?;
        let generation_attack_threshold = oracle
            .generation_attack_threshold(head, miner)
            .map_err(|source| Error::GenerationAttackThresholdFetch {
                miner: *miner,
                source,
            })?;
        Ok(Self {
            proving_period,
            generation_attack_threshold,
        })
    }
}

/// Oracle answering with the same schedule for every miner and head.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticPeriodOracle {
    pub proving_period: ProvingPeriod,
    pub generation_attack_threshold: HeightDelta,
}

impl PeriodOracle for StaticPeriodOracle {
    fn proving_period(&self, _: &Tipset, _: &Address) -> anyhow::Result<ProvingPeriod> {
        Ok(self.proving_period)
    }

    fn generation_attack_threshold(&self, _: &Tipset, _: &Address) -> anyhow::Result<HeightDelta> {
        Ok(self.generation_attack_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn late_submission_limit_counts_from_start() {
        let period = ProvingPeriod::new(1, 2);
        assert_eq!(period.late_submission_limit(BlockHeight::new(3)), Ok(2));
        assert_eq!(period.late_submission_limit(BlockHeight::new(1)), Ok(0));
        assert!(period.late_submission_limit(BlockHeight::GENESIS).is_err());
    }
}
