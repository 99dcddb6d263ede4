// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

mod cursor;

pub use cursor::{AncestorCursor, ChainCursor};

use thiserror::Error;

/// Chain traversal error
#[derive(Debug, Error)]
pub enum Error {
    /// The cursor already walked past genesis.
    #[error("cursor is complete, cannot advance past genesis")]
    AdvancePastGenesis,
}
