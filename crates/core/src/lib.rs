//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board geometry and the game rules. It has
//! **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: a game is fully defined by its construction
//!   parameters and the sequence of applied moves
//! - **Testable**: every rule is exercised through the public API
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: parametric cross-shaped grid with region membership,
//!   cell access, and textual rendering
//! - [`game`]: jump-capture move validation and execution, score
//!   tracking, and terminal-state detection
//!
//! # Game Rules
//!
//! Marble solitaire on a cross-shaped board of configurable arm
//! thickness (odd, positive):
//!
//! - A move jumps a marble exactly two cells horizontally or vertically
//!   onto an empty cell, over an adjacent marble, which is removed
//! - Diagonal jumps are never legal
//! - The score is the number of marbles remaining on the board
//! - The game is over when no legal jump exists anywhere

pub mod board;
pub mod game;

// Re-export commonly used types
pub use board::{Board, InvalidConfiguration};
pub use game::{Game, IllegalMove};
