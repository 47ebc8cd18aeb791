//! RNG module - piece generation with session-unique ids
//!
//! Kinds are drawn uniformly from the closed set {I, O, T, L}. The kind
//! source is a trait so tests can substitute a scripted sequence; the
//! default source is a seeded LCG, which keeps the library deterministic
//! for a given seed. Wall-clock seeding happens only in the binary.

use crate::types::{Piece, PieceKind};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Source of piece kinds for the generator.
pub trait KindSource: std::fmt::Debug {
    fn next_kind(&mut self) -> PieceKind;
}

/// Uniform random kinds from a seeded LCG.
#[derive(Debug, Clone)]
pub struct RandomKinds {
    rng: SimpleRng,
}

impl RandomKinds {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl KindSource for RandomKinds {
    fn next_kind(&mut self) -> PieceKind {
        let i = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[i]
    }
}

/// Predefined kind sequence for deterministic tests; cycles when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedKinds {
    kinds: Vec<PieceKind>,
    index: usize,
}

impl ScriptedKinds {
    pub fn new(kinds: &[PieceKind]) -> Self {
        Self {
            kinds: kinds.to_vec(),
            index: 0,
        }
    }
}

impl KindSource for ScriptedKinds {
    fn next_kind(&mut self) -> PieceKind {
        if self.kinds.is_empty() {
            return PieceKind::I;
        }
        let kind = self.kinds[self.index % self.kinds.len()];
        self.index += 1;
        kind
    }
}

/// Piece generator: a kind source plus the session id counter.
///
/// Ids start at 0 and increase by one per generated piece; they are never
/// reset within a session, so every piece a session sees is unique.
#[derive(Debug)]
pub struct PieceGenerator {
    source: Box<dyn KindSource>,
    next_id: u32,
}

impl PieceGenerator {
    /// Generator backed by a seeded uniform source.
    pub fn from_seed(seed: u32) -> Self {
        Self::with_source(Box::new(RandomKinds::new(seed)))
    }

    /// Generator backed by an arbitrary kind source.
    pub fn with_source(source: Box<dyn KindSource>) -> Self {
        Self { source, next_id: 0 }
    }

    /// Create the next piece. Always succeeds; consumes one id.
    pub fn generate(&mut self) -> Piece {
        let piece = Piece::new(self.source.next_kind(), self.next_id);
        self.next_id += 1;
        piece
    }

    /// Number of pieces generated so far (also the next id to be issued).
    pub fn pieces_generated(&self) -> u32 {
        self.next_id
    }
}
