//! Game simulation core: grid, pieces, randomizer, scoring and the engine
//! that ties them together. Nothing in here touches the terminal, the clock
//! or the filesystem.

pub mod bag;
pub mod engine;
pub mod grid;
pub mod pieces;
pub mod scoring;

pub use bag::{Lcg, PieceBag};
pub use engine::{ActivePiece, Engine, LockResult};
pub use grid::Grid;
pub use scoring::drop_interval_ms;
