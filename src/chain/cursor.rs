// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::sync::Arc;

use anyhow::Context as _;

use super::Error;
use crate::blocks::Tipset;
use crate::db::{TipsetStore, TipsetStoreExt as _};

/// A forward-only handle walking a chain from some tipset towards genesis.
///
/// The cursor starts positioned at its first tipset. Each [`advance`]
/// moves to the parent generation; advancing from genesis leaves the cursor
/// [`complete`] with no current value. Cursors never move back towards the
/// head.
///
/// [`advance`]: AncestorCursor::advance
/// [`complete`]: AncestorCursor::complete
pub trait AncestorCursor {
    /// `true` once the cursor has walked past genesis.
    fn complete(&self) -> bool;

    /// Moves to the parent tipset. Retrieval may block and may fail.
    fn advance(&mut self) -> anyhow::Result<()>;

    /// The current tipset, or `None` once complete.
    fn value(&self) -> Option<&Tipset>;
}

impl<C: AncestorCursor + ?Sized> AncestorCursor for &mut C {
    fn complete(&self) -> bool {
        (**self).complete()
    }

    fn advance(&mut self) -> anyhow::Result<()> {
        (**self).advance()
    }

    fn value(&self) -> Option<&Tipset> {
        (**self).value()
    }
}

/// [`AncestorCursor`] over any [`TipsetStore`]. Cloning is cheap and yields
/// an independent cursor at the same position.
#[derive(Debug, Clone)]
pub struct ChainCursor<DB> {
    db: DB,
    current: Option<Arc<Tipset>>,
}

impl<DB: TipsetStore> ChainCursor<DB> {
    pub fn new(db: DB, from: Arc<Tipset>) -> Self {
        Self {
            db,
            current: Some(from),
        }
    }
}

impl<DB: TipsetStore> AncestorCursor for ChainCursor<DB> {
    fn complete(&self) -> bool {
        self.current.is_none()
    }

    fn advance(&mut self) -> anyhow::Result<()> {
        let current = self.current.as_ref().ok_or(Error::AdvancePastGenesis)?;
        if current.is_genesis() {
            self.current = None;
            return Ok(());
        }
        let parent = self
            .db
            .load_required_tipset(current.parents())
            .with_context(|| format!("failed to load parent of {}", current.key()))?;
        self.current = Some(parent);
        Ok(())
    }

    fn value(&self) -> Option<&Tipset> {
        self.current.as_deref()
    }
}
