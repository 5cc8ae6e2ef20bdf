//! Core game logic. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod catalog;
pub mod engine;
pub mod events;
pub mod rng;
pub mod state;

pub use cards::*;
pub use catalog::*;
pub use engine::*;
pub use events::*;
pub use rng::*;
pub use state::*;
