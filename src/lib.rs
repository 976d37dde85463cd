//! Marble solitaire (workspace facade crate).
//!
//! This package keeps the `marble_solitaire::{core, types}` public API in one
//! place while the implementation lives in dedicated crates under `crates/`.

pub use marble_solitaire_core as core;
pub use marble_solitaire_types as types;
