// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Distance between two chain heights, also used as a lookback budget
/// measured in tipsets.
pub type HeightDelta = u64;

/// Height of a tipset in the chain. Genesis is at height zero and heights
/// never go negative.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BlockHeight(u64);

/// Returned when subtracting a larger height from a smaller one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("height {minuend} is below {subtrahend}")]
pub struct HeightUnderflow {
    pub minuend: BlockHeight,
    pub subtrahend: BlockHeight,
}

impl BlockHeight {
    pub const GENESIS: BlockHeight = BlockHeight(0);

    pub const fn new(height: u64) -> Self {
        Self(height)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    /// Number of heights separating `self` from an earlier height `other`.
    pub fn delta_since(self, other: BlockHeight) -> Result<HeightDelta, HeightUnderflow> {
        self.0.checked_sub(other.0).ok_or(HeightUnderflow {
            minuend: self,
            subtrahend: other,
        })
    }
}

impl From<u64> for BlockHeight {
    fn from(height: u64) -> Self {
        Self(height)
    }
}

impl From<BlockHeight> for u64 {
    fn from(height: BlockHeight) -> Self {
        height.0
    }
}

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for BlockHeight {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self(u64::arbitrary(g))
    }
}
