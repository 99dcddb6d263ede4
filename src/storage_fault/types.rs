// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::collections::BTreeSet;

use cid::Cid;
use fvm_ipld_encoding::tuple::*;
use serde::{Deserialize, Serialize};

use crate::shim::address::Address;

/// Category of a storage fault. Storage faults, a.k.a. market faults, are
/// distinct from consensus faults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum FaultKind {
    /// The miner did not `submitPost` within the proving period.
    LateSubmission,
    /// The miner did not `submitPost` within the generation attack threshold.
    AfterGenerationAttackThreshold,
    /// The `submitPost` message carries no proofs.
    EmptyProofs,
    /// Reserved. Never emitted.
    MissingSectors,
    /// Reserved. Never emitted.
    EarlySectorRemoval,
}

impl FaultKind {
    /// Numeric fault code as reported to penalty processing.
    pub const fn code(self) -> u8 {
        match self {
            FaultKind::LateSubmission => 51,
            FaultKind::AfterGenerationAttackThreshold => 52,
            FaultKind::EmptyProofs => 53,
            FaultKind::MissingSectors => 54,
            FaultKind::EarlySectorRemoval => 55,
        }
    }
}

/// A storage fault attributed to the `submitPost` message of `miner` in
/// `block`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StorageFault {
    pub code: FaultKind,
    pub miner: Address,
    pub block: Cid,
}

/// Sectors that have failed PoSt during a proving period.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize_tuple, Deserialize_tuple)]
pub struct FaultSet {
    /// Offset from the start of the proving period, currently unused
    pub offset: u64,
    pub sector_ids: BTreeSet<u64>,
}

impl FaultSet {
    pub fn new(sector_ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            offset: 0,
            sector_ids: sector_ids.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sector_ids.is_empty()
    }
}
