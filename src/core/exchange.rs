//! Exchange engine - in-place swaps between the queue and the reserve
//!
//! Both operations validate their preconditions before touching any slot,
//! so a failed exchange leaves both containers exactly as they were.
//! Successful exchanges relocate values only: no piece is created or
//! destroyed, ids are preserved, and neither container's size changes.

use std::mem;

use crate::core::{PieceQueue, PieceReserve};
use crate::types::{SupplyError, EXCHANGE_BLOCK};

/// Swap the queue's front piece with the reserve's top piece.
///
/// Fails with `ExchangeUnavailable` if either side lacks an eligible piece.
pub fn swap_front_top(
    queue: &mut PieceQueue,
    reserve: &mut PieceReserve,
) -> Result<(), SupplyError> {
    if queue.is_empty() || reserve.is_empty() {
        return Err(SupplyError::ExchangeUnavailable);
    }
    let front = queue.slot_mut(0).ok_or(SupplyError::ExchangeUnavailable)?;
    let top = reserve
        .slot_from_top_mut(0)
        .ok_or(SupplyError::ExchangeUnavailable)?;
    mem::swap(front, top);
    Ok(())
}

/// Swap the three frontmost queue pieces with the three topmost reserve
/// pieces, pairing nearest-to-nearest: front <-> top, second <-> second,
/// third <-> third.
///
/// Requires at least [`EXCHANGE_BLOCK`] pieces on both sides; fails with
/// `ExchangeUnavailable` otherwise, mutating nothing.
pub fn swap_block_of_three(
    queue: &mut PieceQueue,
    reserve: &mut PieceReserve,
) -> Result<(), SupplyError> {
    if queue.len() < EXCHANGE_BLOCK || reserve.len() < EXCHANGE_BLOCK {
        return Err(SupplyError::ExchangeUnavailable);
    }
    for i in 0..EXCHANGE_BLOCK {
        // Sizes were checked up front, so both lookups succeed.
        if let (Some(q), Some(r)) = (queue.slot_mut(i), reserve.slot_from_top_mut(i)) {
            mem::swap(q, r);
        }
    }
    Ok(())
}
