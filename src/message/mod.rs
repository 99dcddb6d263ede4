// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

mod post;

use crate::shim::address::Address;
use fvm_ipld_encoding::RawBytes;
use fvm_ipld_encoding::tuple::*;

pub use post::{PoStProof, SubmitPoStParams};

/// Method tag identifying a storage proof submission.
pub const SUBMIT_POST_METHOD: &str = "submitPost";

/// A message as included in a block. Only the fields needed to attribute a
/// proof submission to its sender are kept; signature checks happen before a
/// block is accepted into the chain.
#[derive(PartialEq, Clone, Debug, Serialize_tuple, Deserialize_tuple, Hash, Eq)]
pub struct ChainMessage {
    pub method: String,
    pub from: Address,
    pub params: RawBytes,
}

impl ChainMessage {
    pub fn new(method: impl Into<String>, from: Address, params: RawBytes) -> Self {
        Self {
            method: method.into(),
            from,
            params,
        }
    }

    /// Builds a `submitPost` message carrying the given proofs.
    pub fn submit_post(from: Address, proofs: Vec<PoStProof>) -> anyhow::Result<Self> {
        let params = RawBytes::serialize(SubmitPoStParams { proofs })?;
        Ok(Self::new(SUBMIT_POST_METHOD, from, params))
    }

    pub fn is_submit_post(&self) -> bool {
        self.method == SUBMIT_POST_METHOD
    }

    /// Returns `true` for a `submitPost` message sent by `miner`.
    pub fn is_submit_post_from(&self, miner: &Address) -> bool {
        self.is_submit_post() && &self.from == miner
    }

    /// Number of proofs carried in the parameters. Payloads that are empty or
    /// do not decode count as carrying no proofs.
    pub fn proof_count(&self) -> usize {
        if self.params.bytes().is_empty() {
            return 0;
        }
        match self.params.deserialize::<SubmitPoStParams>() {
            Ok(params) => params.proofs.len(),
            Err(e) => {
                tracing::trace!(from = %self.from, "undecodable submitPost params: {e}");
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proof_count_of_empty_params_is_zero() {
        let msg = ChainMessage::new(SUBMIT_POST_METHOD, Address::new_id(1), RawBytes::default());
        assert_eq!(msg.proof_count(), 0);
    }

    #[test]
    fn proof_count_of_garbage_params_is_zero() {
        let msg = ChainMessage::new(
            SUBMIT_POST_METHOD,
            Address::new_id(1),
            RawBytes::new(vec![0xff, 0x00, 0x13]),
        );
        assert_eq!(msg.proof_count(), 0);
    }

    #[test]
    fn proof_count_of_encoded_params() {
        let proofs = vec![PoStProof::new(vec![1, 2, 3]), PoStProof::new(vec![4])];
        let msg = ChainMessage::submit_post(Address::new_id(1), proofs).unwrap();
        assert_eq!(msg.proof_count(), 2);

        let msg = ChainMessage::submit_post(Address::new_id(1), vec![]).unwrap();
        assert_eq!(msg.proof_count(), 0);
    }

    #[test]
    fn submit_post_is_matched_by_method_and_sender() {
        let miner = Address::new_id(7);
        let msg = ChainMessage::submit_post(miner, vec![PoStProof::new(vec![1])]).unwrap();
        assert!(msg.is_submit_post_from(&miner));
        assert!(!msg.is_submit_post_from(&Address::new_id(8)));

        let other = ChainMessage::new("commitSector", miner, RawBytes::default());
        assert!(!other.is_submit_post_from(&miner));
    }
}
