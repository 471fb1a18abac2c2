//! RPSLS Core Library
//!
//! This crate provides the move set, the beats relation, round resolution
//! and the interactive session loop for Rock-Paper-Scissors-Lizard-Spock.

pub mod config;
pub mod error;
pub mod games;
pub mod round;
pub mod session;

pub use config::GameConfig;
pub use error::{MoveParseError, RoundsError, SessionError};
pub use games::{resolve, Move, Resolver, REAL_MOVES};
pub use round::{Outcome, RoundRecord};
pub use session::{parse_rounds, rounds_or_default, Session, SessionSummary};
