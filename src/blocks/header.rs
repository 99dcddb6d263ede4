// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::TipsetKey;
use crate::shim::{address::Address, clock::BlockHeight};
use fvm_ipld_encoding::tuple::*;

#[derive(Deserialize_tuple, Serialize_tuple, Clone, Hash, Eq, PartialEq, Debug)]
pub struct BlockHeader {
    /// The address of the miner actor that mined this block
    pub miner_address: Address,
    /// The set of parents this block was based on. Empty only for genesis.
    pub parents: TipsetKey,
    pub height: BlockHeight,
    /// Block creation time, in seconds since the Unix epoch
    pub timestamp: u64,
}

impl BlockHeader {
    pub fn new(miner_address: Address, parents: TipsetKey, height: BlockHeight) -> Self {
        Self {
            miner_address,
            parents,
            height,
            timestamp: 0,
        }
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }
}
