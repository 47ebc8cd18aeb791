//! Core types shared across the application
//!
//! Pure data types for the piece-supply model plus the failure taxonomy
//! every supply operation reports through.

use std::fmt;

use thiserror::Error;

/// Capacity of the upcoming-piece queue.
pub const QUEUE_CAPACITY: usize = 5;

/// Capacity of the reserve stack.
pub const RESERVE_CAPACITY: usize = 3;

/// Number of pieces moved by the block exchange.
pub const EXCHANGE_BLOCK: usize = 3;

/// Piece shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// All kinds, in generator order.
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to display character
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }
}

/// A supply piece: shape kind plus a session-unique id.
///
/// Pieces are created only by the generator and keep their id when moved
/// between the queue and the reserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u32,
}

impl Piece {
    pub fn new(kind: PieceKind, id: u32) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind.as_char(), self.id)
    }
}

/// Failure taxonomy for supply operations.
///
/// Every failure is locally recoverable; no operation mutates state before
/// its preconditions hold.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SupplyError {
    #[error("queue is empty")]
    QueueEmpty,
    #[error("queue is full")]
    QueueFull,
    #[error("reserve is empty")]
    ReserveEmpty,
    #[error("reserve is full")]
    ReserveFull,
    #[error("exchange unavailable: not enough pieces on one side")]
    ExchangeUnavailable,
}
