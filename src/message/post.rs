// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use fvm_ipld_encoding::tuple::*;
use serde::{Deserialize, Serialize};

/// Opaque proof of spacetime bytes. Verification happens elsewhere; fault
/// detection only needs to know whether any proofs were submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoStProof(#[serde(with = "fvm_ipld_encoding::strict_bytes")] pub Vec<u8>);

impl PoStProof {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// Parameters of a `submitPost` message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize_tuple, Deserialize_tuple)]
pub struct SubmitPoStParams {
    pub proofs: Vec<PoStProof>,
}
