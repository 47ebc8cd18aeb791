//! Piece-supply trainer for a simplified Tetris-like game.
//!
//! The model is a fixed-capacity queue of upcoming pieces (front is next to
//! play), a fixed-capacity reserve stack, and exchange operations that move
//! or swap pieces between them. All rules live in [`core`]; [`term`] only
//! renders.

pub mod core;
pub mod term;
pub mod types;
