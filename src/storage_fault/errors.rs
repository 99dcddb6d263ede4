// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use thiserror::Error;

use crate::blocks::TipsetKey;
use crate::shim::{address::Address, clock::HeightUnderflow};

/// Errors that end a scan. Faults found before the error are still returned
/// alongside it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to fetch proving period of {miner}: {source}")]
    ProvingPeriodFetch {
        miner: Address,
        #[source]
        source: anyhow::Error,
    },
    #[error("failed to fetch generation attack threshold of {miner}: {source}")]
    GenerationAttackThresholdFetch {
        miner: Address,
        #[source]
        source: anyhow::Error,
    },
    #[error("failed to advance ancestor cursor: {0}")]
    CursorAdvance(#[source] anyhow::Error),
    #[error("proving period starts after head: {0}")]
    HeightUnderflow(#[from] HeightUnderflow),
    #[error("cursor is not positioned at head {head}")]
    CursorNotAtHead { head: TipsetKey },
    #[error("scan cancelled")]
    Cancelled,
}
