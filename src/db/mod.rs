// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

mod memory;

use std::sync::Arc;

use crate::blocks::{Tipset, TipsetKey};

pub use memory::MemoryDB;

/// Interface used to retrieve tipsets by key. Chain selection and fork
/// resolution happen upstream; a store only answers for the keys it holds.
pub trait TipsetStore {
    /// Returns `Ok(None)` if the key is not present in the store.
    fn load_tipset(&self, key: &TipsetKey) -> anyhow::Result<Option<Arc<Tipset>>>;
}

/// Extension trait for the [`TipsetStore`] trait. It is implemented for all
/// types that implement [`TipsetStore`].
pub trait TipsetStoreExt {
    /// Same as [`TipsetStore::load_tipset`], but returns an error if the key
    /// does not exist.
    fn load_required_tipset(&self, key: &TipsetKey) -> anyhow::Result<Arc<Tipset>>;
}

impl<T: ?Sized + TipsetStore> TipsetStoreExt for T {
    fn load_required_tipset(&self, key: &TipsetKey) -> anyhow::Result<Arc<Tipset>> {
        self.load_tipset(key)?
            .ok_or_else(|| anyhow::anyhow!("Tipset {key} not found"))
    }
}

impl<DB: ?Sized + TipsetStore> TipsetStore for Arc<DB> {
    fn load_tipset(&self, key: &TipsetKey) -> anyhow::Result<Option<Arc<Tipset>>> {
        TipsetStore::load_tipset(self.as_ref(), key)
    }
}

impl<DB: ?Sized + TipsetStore> TipsetStore for &DB {
    fn load_tipset(&self, key: &TipsetKey) -> anyhow::Result<Option<Arc<Tipset>>> {
        TipsetStore::load_tipset(*self, key)
    }
}
