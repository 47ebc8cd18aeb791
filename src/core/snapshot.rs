//! Read-only view of the supply state, for display purposes only.

use arrayvec::ArrayVec;

use crate::core::{PieceQueue, PieceReserve};
use crate::types::{Piece, QUEUE_CAPACITY, RESERVE_CAPACITY};

/// Point-in-time copy of the queue (front-to-back) and the reserve
/// (top-to-bottom).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplySnapshot {
    pub queue: ArrayVec<Piece, QUEUE_CAPACITY>,
    pub reserve: ArrayVec<Piece, RESERVE_CAPACITY>,
}

impl SupplySnapshot {
    pub fn capture(queue: &PieceQueue, reserve: &PieceReserve) -> Self {
        Self {
            queue: queue.iter().copied().collect(),
            reserve: reserve.iter_from_top().copied().collect(),
        }
    }
}
