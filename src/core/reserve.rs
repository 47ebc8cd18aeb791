//! Reserve module - fixed-capacity stack of set-aside pieces
//!
//! Strict LIFO: the top is always the most recently pushed piece that has
//! not been popped yet.

use crate::types::{Piece, SupplyError, RESERVE_CAPACITY};

/// LIFO of pieces set aside for later use, bounded at [`RESERVE_CAPACITY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceReserve {
    slots: [Option<Piece>; RESERVE_CAPACITY],
    len: usize,
}

impl PieceReserve {
    /// Create an empty reserve
    pub fn new() -> Self {
        Self {
            slots: [None; RESERVE_CAPACITY],
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
        self.len == RESERVE_CAPACITY
    }

    /// Place a piece on top.
    ///
    /// Rejects with `ReserveFull` when at capacity.
    pub fn push(&mut self, piece: Piece) -> Result<(), SupplyError> {
        if self.is_full() {
            return Err(SupplyError::ReserveFull);
        }
        debug_assert!(self.slots[self.len].is_none());
        self.slots[self.len] = Some(piece);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the top piece.
    pub fn pop(&mut self) -> Result<Piece, SupplyError> {
        if self.is_empty() {
            return Err(SupplyError::ReserveEmpty);
        }
        self.len -= 1;
        self.slots[self.len].take().ok_or(SupplyError::ReserveEmpty)
    }

    /// Read-only view of the top piece.
    pub fn peek_top(&self) -> Result<&Piece, SupplyError> {
        if self.is_empty() {
            return Err(SupplyError::ReserveEmpty);
        }
        self.slots[self.len - 1]
            .as_ref()
            .ok_or(SupplyError::ReserveEmpty)
    }

    /// Mutable access to the i-th occupied slot counting down from the top.
    ///
    /// `i == 0` is the top. Used by the exchange engine.
    pub(crate) fn slot_from_top_mut(&mut self, i: usize) -> Option<&mut Piece> {
        if i >= self.len {
            return None;
        }
        self.slots[self.len - 1 - i].as_mut()
    }

    /// Iterate top-to-bottom (reverse push order).
    pub fn iter_from_top(&self) -> impl Iterator<Item = &Piece> {
        (0..self.len).filter_map(move |i| self.slots[self.len - 1 - i].as_ref())
    }
}

impl Default for PieceReserve {
    fn default() -> Self {
        Self::new()
    }
}
