// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::message::ChainMessage;
use crate::shim::clock::BlockHeight;
use crate::utils::cid::CidCborExt as _;
use cid::Cid;

use super::BlockHeader;

/// A block header together with the messages it includes, in inclusion
/// order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    header: BlockHeader,
    messages: Vec<ChainMessage>,
    cid: Cid,
}

impl std::hash::Hash for Block {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(self.cid(), state)
    }
}

impl Block {
    /// The content identifier covers both the header and the messages.
    pub fn new(header: BlockHeader, messages: Vec<ChainMessage>) -> anyhow::Result<Self> {
        let cid = Cid::from_cbor_blake2b256(&(&header, &messages))?;
        Ok(Self {
            header,
            messages,
            cid,
        })
    }

    pub fn header(&self) -> &BlockHeader {
        &self.header
    }

    pub fn messages(&self) -> &[ChainMessage] {
        &self.messages
    }

    pub fn height(&self) -> BlockHeight {
        self.header.height
    }

    pub fn cid(&self) -> &Cid {
        &self.cid
    }
}
