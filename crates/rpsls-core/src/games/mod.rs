//! Move definitions and round resolution.

mod moves;
mod resolver;

pub use moves::{Move, REAL_MOVES};
pub use resolver::{resolve, Resolver};
