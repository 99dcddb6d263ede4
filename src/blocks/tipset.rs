// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::fmt;

use cid::Cid;
use itertools::Itertools as _;
use serde::{Deserialize, Serialize};

use super::{Block, Error};
use crate::message::ChainMessage;
use crate::shim::{address::Address, clock::BlockHeight};

/// A set of CIDs forming a unique key for a tipset. Equal keys have the same
/// CIDs in the same order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TipsetKey(Vec<Cid>);

impl TipsetKey {
    pub fn cids(&self) -> &[Cid] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Cid>> for TipsetKey {
    fn from(cids: Vec<Cid>) -> Self {
        Self(cids)
    }
}

impl fmt::Display for TipsetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}

/// An immutable set of blocks at the same height with the same parent set.
/// Blocks keep the order they were given in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tipset {
    blocks: Vec<Block>,
    key: TipsetKey,
}

impl Tipset {
    /// Builds a new tipset from a collection of blocks. A valid tipset
    /// contains a non-empty collection of distinct blocks that share a height
    /// and a parent key.
    pub fn new(blocks: Vec<Block>) -> Result<Self, Error> {
        let first = blocks.first().ok_or(Error::NoBlocks)?;
        let (height, parents) = (first.height(), &first.header().parents);
        for block in &blocks[1..] {
            if block.height() != height {
                return Err(Error::InvalidTipset(format!(
                    "block {} has height {}, expected {height}",
                    block.cid(),
                    block.height()
                )));
            }
            if &block.header().parents != parents {
                return Err(Error::InvalidTipset(format!(
                    "block {} has parents {}, expected {parents}",
                    block.cid(),
                    block.header().parents
                )));
            }
        }
        if let Some(cid) = blocks.iter().map(Block::cid).duplicates().next() {
            return Err(Error::InvalidTipset(format!("duplicate block {cid}")));
        }
        let key = TipsetKey::from(blocks.iter().map(|b| *b.cid()).collect::<Vec<_>>());
        Ok(Self { blocks, key })
    }

    pub fn height(&self) -> BlockHeight {
        self.min_block().height()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always `false`; tipsets are never constructed without blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn key(&self) -> &TipsetKey {
        &self.key
    }

    pub fn parents(&self) -> &TipsetKey {
        &self.min_block().header().parents
    }

    pub fn is_genesis(&self) -> bool {
        self.parents().is_empty()
    }

    /// Returns `true` if any block includes a `submitPost` message from
    /// `miner`.
    pub fn has_submit_post_from(&self, miner: &Address) -> bool {
        self.messages().any(|msg| msg.is_submit_post_from(miner))
    }

    /// All messages of the tipset, in block order then inclusion order.
    pub fn messages(&self) -> impl Iterator<Item = &ChainMessage> + '_ {
        self.blocks.iter().flat_map(|b| b.messages())
    }

    fn min_block(&self) -> &Block {
        &self.blocks[0]
    }
}

impl TryFrom<Block> for Tipset {
    type Error = Error;

    fn try_from(block: Block) -> Result<Self, Self::Error> {
        Self::new(vec![block])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::BlockHeader;
    use crate::message::{ChainMessage, PoStProof};

    fn block(parents: TipsetKey, height: u64, timestamp: u64) -> Block {
        Block::new(
            BlockHeader::new(Address::new_id(1000), parents, BlockHeight::new(height))
                .with_timestamp(timestamp),
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn empty_tipset_is_rejected() {
        assert_eq!(Tipset::new(vec![]), Err(Error::NoBlocks));
    }

    #[test]
    fn mixed_heights_are_rejected() {
        let parents = TipsetKey::default();
        let result = Tipset::new(vec![block(parents.clone(), 1, 0), block(parents, 2, 1)]);
        assert!(matches!(result, Err(Error::InvalidTipset(_))));
    }

    #[test]
    fn mixed_parents_are_rejected() {
        let genesis = Tipset::try_from(block(TipsetKey::default(), 0, 0)).unwrap();
        let result = Tipset::new(vec![
            block(genesis.key().clone(), 1, 1),
            block(TipsetKey::default(), 1, 2),
        ]);
        assert!(matches!(result, Err(Error::InvalidTipset(_))));
    }

    #[test]
    fn duplicate_blocks_are_rejected() {
        let a = block(TipsetKey::default(), 0, 1);
        let result = Tipset::new(vec![a.clone(), block(TipsetKey::default(), 0, 2), a]);
        assert!(matches!(result, Err(Error::InvalidTipset(msg)) if msg.starts_with("duplicate")));
    }

    #[test]
    fn key_follows_block_order() {
        let a = block(TipsetKey::default(), 0, 1);
        let b = block(TipsetKey::default(), 0, 2);
        let ts = Tipset::new(vec![a.clone(), b.clone()]).unwrap();
        assert_eq!(ts.key().cids(), &[*a.cid(), *b.cid()]);
        assert!(ts.is_genesis());
        assert_eq!(ts.height(), BlockHeight::GENESIS);
    }

    #[test]
    fn finds_submit_post_in_any_block() {
        let miner = Address::new_id(42);
        let a = block(TipsetKey::default(), 0, 1);
        let b = Block::new(
            BlockHeader::new(Address::new_id(1001), TipsetKey::default(), BlockHeight::GENESIS),
            vec![ChainMessage::submit_post(miner, vec![PoStProof::new(vec![1])]).unwrap()],
        )
        .unwrap();
        let ts = Tipset::new(vec![a, b]).unwrap();
        assert!(ts.has_submit_post_from(&miner));
        assert!(!ts.has_submit_post_from(&Address::new_id(43)));
    }
}
