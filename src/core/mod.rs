//! Core module - pure piece-supply logic with no I/O dependencies
//!
//! This module contains the queue, the reserve, the exchange rules, and the
//! generator. It has zero dependencies on UI or terminal handling.

pub mod exchange;
pub mod queue;
pub mod reserve;
pub mod rng;
pub mod session;
pub mod snapshot;

// Re-export commonly used types
pub use exchange::{swap_block_of_three, swap_front_top};
pub use queue::PieceQueue;
pub use reserve::PieceReserve;
pub use rng::{KindSource, PieceGenerator, RandomKinds, ScriptedKinds, SimpleRng};
pub use session::GameSession;
pub use snapshot::SupplySnapshot;
