//! Queue module - fixed-capacity ring buffer of upcoming pieces
//!
//! Front is the next piece to play; back is where replenished pieces land.
//! The backing store is an index-addressed array with modular front/back
//! arithmetic, so capacity is a hard invariant rather than a hint.

use crate::types::{Piece, SupplyError, QUEUE_CAPACITY};

/// FIFO of pieces awaiting play, bounded at [`QUEUE_CAPACITY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceQueue {
    slots: [Option<Piece>; QUEUE_CAPACITY],
    front: usize,
    len: usize,
}

impl PieceQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            slots: [None; QUEUE_CAPACITY],
            front: 0,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == QUEUE_CAPACITY
    }

    /// Append a piece at the back.
    ///
    /// Rejects with `QueueFull` when at capacity; an occupied slot is never
    /// overwritten.
    pub fn enqueue(&mut self, piece: Piece) -> Result<(), SupplyError> {
        if self.is_full() {
            return Err(SupplyError::QueueFull);
        }
        let back = (self.front + self.len) % QUEUE_CAPACITY;
        debug_assert!(self.slots[back].is_none());
        self.slots[back] = Some(piece);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the front piece; front advances cyclically.
    pub fn dequeue(&mut self) -> Result<Piece, SupplyError> {
        let piece = self.slots[self.front]
            .take()
            .ok_or(SupplyError::QueueEmpty)?;
        self.front = (self.front + 1) % QUEUE_CAPACITY;
        self.len -= 1;
        Ok(piece)
    }

    /// Read-only view of the front piece.
    pub fn peek_front(&self) -> Result<&Piece, SupplyError> {
        self.slots[self.front]
            .as_ref()
            .ok_or(SupplyError::QueueEmpty)
    }

    /// Mutable access to the i-th occupied slot from the front.
    ///
    /// Used by the exchange engine to swap values in place without
    /// disturbing the ring indices.
    pub(crate) fn slot_mut(&mut self, i: usize) -> Option<&mut Piece> {
        if i >= self.len {
            return None;
        }
        self.slots[(self.front + i) % QUEUE_CAPACITY].as_mut()
    }

    /// Iterate front-to-back (arrival order).
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        (0..self.len).filter_map(move |i| self.slots[(self.front + i) % QUEUE_CAPACITY].as_ref())
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new()
    }
}
