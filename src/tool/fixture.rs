// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::sync::Arc;

use anyhow::Context as _;
use fvm_ipld_encoding::RawBytes;
use serde::{Deserialize, Serialize};

use crate::blocks::{Block, BlockHeader, Tipset, TipsetKey};
use crate::db::MemoryDB;
use crate::message::{ChainMessage, PoStProof, SUBMIT_POST_METHOD};
use crate::shim::{
    address::{self, Address},
    clock::BlockHeight,
};
use crate::storage_fault::{StaticPeriodOracle, StorageFault};

/// A linear chain written out from genesis to head, along with the proving
/// schedule in effect at the head.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainFixture {
    #[serde(flatten)]
    pub schedule: StaticPeriodOracle,
    pub tipsets: Vec<TipsetFixture>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipsetFixture {
    pub height: BlockHeight,
    pub blocks: Vec<BlockFixture>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockFixture {
    #[serde(with = "address::json")]
    pub miner: Address,
    #[serde(default)]
    pub timestamp: u64,
    #[serde(default)]
    pub messages: Vec<MessageFixture>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageFixture {
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(with = "address::json")]
    pub from: Address,
    /// Raw parameters, hex encoded
    #[serde(default, with = "hex")]
    pub params: Vec<u8>,
    /// Number of placeholder proofs to encode as `submitPost` parameters, at
    /// most [`MAX_FIXTURE_PROOFS`]. Takes precedence over `params`.
    #[serde(default)]
    pub proofs: Option<usize>,
}

/// Upper bound on generated placeholder proofs per message.
pub const MAX_FIXTURE_PROOFS: usize = 256;

fn default_method() -> String {
    SUBMIT_POST_METHOD.to_owned()
}

impl MessageFixture {
    fn to_message(&self) -> anyhow::Result<ChainMessage> {
        match self.proofs {
            Some(n) => {
                anyhow::ensure!(
                    n <= MAX_FIXTURE_PROOFS,
                    "{n} proofs requested, at most {MAX_FIXTURE_PROOFS} allowed"
                );
                let proofs = (0..=u8::MAX)
                    .take(n)
                    .map(|i| PoStProof::new(vec![i; 32]))
                    .collect();
                let mut msg = ChainMessage::submit_post(self.from, proofs)?;
                msg.method.clone_from(&self.method);
                Ok(msg)
            }
            None => Ok(ChainMessage::new(
                self.method.clone(),
                self.from,
                RawBytes::new(self.params.clone()),
            )),
        }
    }
}

impl ChainFixture {
    /// Stores every tipset, each one the parent of the next, and returns the
    /// store together with the head. Heights must strictly increase; gaps
    /// stand for null rounds.
    pub fn build(&self) -> anyhow::Result<(Arc<MemoryDB>, Arc<Tipset>)> {
        let db = Arc::new(MemoryDB::default());
        let mut parents = TipsetKey::default();
        let mut head: Option<Arc<Tipset>> = None;
        for ts in &self.tipsets {
            if let Some(parent) = &head {
                let delta = ts.height.delta_since(parent.height()).with_context(|| {
                    format!("tipset at height {} follows a higher tipset", ts.height)
                })?;
                anyhow::ensure!(delta > 0, "duplicate tipset height {}", ts.height);
            }
            let blocks = ts
                .blocks
                .iter()
                .map(|b| {
                    let header = BlockHeader::new(b.miner, parents.clone(), ts.height)
                        .with_timestamp(b.timestamp);
                    let messages = b
                        .messages
                        .iter()
                        .map(MessageFixture::to_message)
                        .collect::<anyhow::Result<Vec<_>>>()?;
                    Block::new(header, messages)
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            let tipset = Tipset::new(blocks)
                .with_context(|| format!("invalid tipset at height {}", ts.height))?;
            parents = tipset.key().clone();
            head = Some(db.put_tipset(tipset));
        }
        let head = head.context("chain fixture has no tipsets")?;
        Ok((db, head))
    }
}

/// Printable form of a [`StorageFault`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaultRecord {
    pub code: u8,
    pub kind: String,
    pub miner: String,
    pub block: String,
}

impl From<&StorageFault> for FaultRecord {
    fn from(fault: &StorageFault) -> Self {
        Self {
            code: fault.code.code(),
            kind: fault.code.to_string(),
            miner: fault.miner.to_string(),
            block: fault.block.to_string(),
        }
    }
}
