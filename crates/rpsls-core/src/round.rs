//! Round outcomes and records.

use crate::games::Move;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Round result, seen from the human player
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWins,
    ComputerWins,
    Draw,
}

impl Outcome {
    /// Line printed after a round
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::PlayerWins => "Player wins!",
            Outcome::ComputerWins => "Computer wins!",
            Outcome::Draw => "Draw!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One completed round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number
    pub round: u32,
    pub player: Move,
    pub opponent: Move,
    pub outcome: Outcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_str() {
        assert_eq!(Outcome::PlayerWins.as_str(), "Player wins!");
        assert_eq!(Outcome::ComputerWins.as_str(), "Computer wins!");
        assert_eq!(Outcome::Draw.to_string(), "Draw!");
    }

    #[test]
    fn test_record_json_shape() {
        let record = RoundRecord {
            round: 1,
            player: Move::Cheat,
            opponent: Move::Rock,
            outcome: Outcome::PlayerWins,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["player"], "Cheat");
        assert_eq!(value["outcome"], "PlayerWins");
    }
}
