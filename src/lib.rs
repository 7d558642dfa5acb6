//! blockfall: a terminal falling-block puzzle game.
//!
//! The library is split along its natural seams: a pure game-state core
//! (`core`), the cooperative poll/gravity/render loop (`driver`), the
//! console boundary and its crossterm adapter (`term`), key decoding
//! (`input`), and shared types (`types`).

pub mod core;
pub mod driver;
pub mod input;
pub mod term;
pub mod types;
