//! Game session - ties together queue, reserve, and generator
//!
//! The session exclusively owns all mutable supply state and exposes the
//! only entry points the outside world may call. Every operation completes
//! or fails synchronously; failures never mutate state.

use crate::core::{exchange, PieceGenerator, PieceQueue, PieceReserve, SupplySnapshot};
use crate::types::{Piece, SupplyError, QUEUE_CAPACITY};

/// One active supply session: an upcoming-piece queue kept at capacity, a
/// reserve stack, and the generator that feeds them.
#[derive(Debug)]
pub struct GameSession {
    queue: PieceQueue,
    reserve: PieceReserve,
    generator: PieceGenerator,
}

impl GameSession {
    /// Create a session with a seeded uniform generator.
    ///
    /// The queue starts filled to capacity (ids 0..4); the reserve starts
    /// empty.
    pub fn new(seed: u32) -> Self {
        Self::with_generator(PieceGenerator::from_seed(seed))
    }

    /// Create a session around an injected generator.
    pub fn with_generator(mut generator: PieceGenerator) -> Self {
        let mut queue = PieceQueue::new();
        for _ in 0..QUEUE_CAPACITY {
            let piece = generator.generate();
            // A freshly created queue always has room.
            let _ = queue.enqueue(piece);
        }
        Self {
            queue,
            reserve: PieceReserve::new(),
            generator,
        }
    }

    /// Dequeue and discard the front piece, then replenish the queue.
    ///
    /// Returns the played piece so the caller can display it.
    pub fn play_front(&mut self) -> Result<Piece, SupplyError> {
        let played = self.queue.dequeue()?;
        self.replenish();
        Ok(played)
    }

    /// Move the queue's front piece onto the reserve, then replenish.
    ///
    /// Checked before any mutation: fails with `ReserveFull` leaving the
    /// queue and its front piece untouched.
    pub fn reserve_front(&mut self) -> Result<Piece, SupplyError> {
        if self.reserve.is_full() {
            return Err(SupplyError::ReserveFull);
        }
        let piece = self.queue.dequeue()?;
        self.reserve.push(piece)?;
        self.replenish();
        Ok(piece)
    }

    /// Pop and discard the reserve's top piece. Does not replenish the
    /// queue.
    pub fn use_reserved(&mut self) -> Result<Piece, SupplyError> {
        self.reserve.pop()
    }

    /// Swap the queue's front piece with the reserve's top piece in place.
    pub fn swap_front_top(&mut self) -> Result<(), SupplyError> {
        exchange::swap_front_top(&mut self.queue, &mut self.reserve)
    }

    /// Swap the three frontmost queue pieces with the three topmost reserve
    /// pieces.
    pub fn swap_block_of_three(&mut self) -> Result<(), SupplyError> {
        exchange::swap_block_of_three(&mut self.queue, &mut self.reserve)
    }

    /// Read-only view for display.
    pub fn snapshot(&self) -> SupplySnapshot {
        SupplySnapshot::capture(&self.queue, &self.reserve)
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn reserve(&self) -> &PieceReserve {
        &self.reserve
    }

    /// Total pieces created so far in this session.
    pub fn pieces_generated(&self) -> u32 {
        self.generator.pieces_generated()
    }

    /// Top the queue back up after a removal.
    ///
    /// Generates only when there is room, so no id is burned on a rejected
    /// enqueue.
    fn replenish(&mut self) {
        if self.queue.is_full() {
            return;
        }
        let piece = self.generator.generate();
        let _ = self.queue.enqueue(piece);
    }
}
