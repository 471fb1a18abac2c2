//! Interactive session loop.
//!
//! The loop is written against `BufRead`/`Write` and any `rand::Rng`, so the
//! binary drives it with stdin/stdout and the thread RNG while tests feed it
//! scripted input and a seeded generator.

mod rounds;
mod runner;

pub use rounds::{parse_rounds, rounds_or_default};
pub use runner::{Session, SessionSummary};
