// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::sync::Arc;

use super::TipsetStore;
use crate::blocks::{Tipset, TipsetKey};
use ahash::HashMap;
use parking_lot::RwLock;

#[derive(Debug, Default)]
pub struct MemoryDB {
    tipsets: RwLock<HashMap<TipsetKey, Arc<Tipset>>>,
}

impl MemoryDB {
    /// Stores the tipset under its own key, returning the shared handle.
    pub fn put_tipset(&self, tipset: Tipset) -> Arc<Tipset> {
        let tipset = Arc::new(tipset);
        self.tipsets
            .write()
            .insert(tipset.key().clone(), tipset.clone());
        tipset
    }

    pub fn len(&self) -> usize {
        self.tipsets.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tipsets.read().is_empty()
    }
}

impl TipsetStore for MemoryDB {
    fn load_tipset(&self, key: &TipsetKey) -> anyhow::Result<Option<Arc<Tipset>>> {
        Ok(self.tipsets.read().get(key).cloned())
    }
}
