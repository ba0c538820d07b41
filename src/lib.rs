//! neon-drop: a falling-block puzzle for the terminal.
//!
//! The crate splits into a pure simulation [`core`] and a thin shell around
//! it: [`term`] renders, [`input`] maps keys to commands, [`audio`] plays
//! cues, [`session`] persists the player profile and [`report`] ships final
//! scores. The binary in `main.rs` wires the pieces together.

pub mod audio;
pub mod core;
pub mod input;
pub mod report;
pub mod session;
pub mod term;
pub mod types;
