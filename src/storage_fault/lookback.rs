// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use tokio_util::sync::CancellationToken;

use super::Error;
use crate::chain::AncestorCursor;
use crate::shim::{
    address::Address,
    clock::{BlockHeight, HeightDelta},
};

/// Returns the height at which `miner` last sent a `submitPost` message, or
/// `None` if it was not seen within `limit` tipsets behind the cursor's
/// current position, not counting that position.
///
/// The cursor is advanced at most `limit` times and is left wherever the
/// search stopped. Callers running several searches over one cursor get
/// disjoint windows, each one starting where the previous search ended.
pub fn lookback<C: AncestorCursor + ?Sized>(
    miner: &Address,
    cursor: &mut C,
    limit: HeightDelta,
) -> Result<Option<BlockHeight>, Error> {
    lookback_cancellable(miner, cursor, limit, None)
}

/// Same as [`lookback`], checking `cancel` before every advance.
pub fn lookback_cancellable<C: AncestorCursor + ?Sized>(
    miner: &Address,
    cursor: &mut C,
    limit: HeightDelta,
    cancel: Option<&CancellationToken>,
) -> Result<Option<BlockHeight>, Error> {
    let mut steps: HeightDelta = 0;
    while !cursor.complete() && steps < limit {
        if cancel.is_some_and(CancellationToken::is_cancelled) {
            return Err(Error::Cancelled);
        }
        cursor.advance().map_err(Error::CursorAdvance)?;
        steps += 1;

        let Some(tipset) = cursor.value() else {
            break;
        };
        tracing::trace!(%miner, height = %tipset.height(), steps, limit, "lookback step");
        if tipset.has_submit_post_from(miner) {
            return Ok(Some(tipset.height()));
        }
    }
    Ok(None)
}
