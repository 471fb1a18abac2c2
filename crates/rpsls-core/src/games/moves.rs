//! Rock-Paper-Scissors-Lizard-Spock moves and the beats relation.

use crate::error::MoveParseError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A move a player can make
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
    /// Beats every real move. Accepted from the player only; the opponent
    /// never picks it.
    Cheat,
}

/// The five moves the opponent chooses from, in display order.
pub const REAL_MOVES: [Move; 5] = [
    Move::Rock,
    Move::Paper,
    Move::Scissors,
    Move::Lizard,
    Move::Spock,
];

impl Move {
    /// Every move the player may enter, Cheat included.
    pub const ALL: [Move; 6] = [
        Move::Rock,
        Move::Paper,
        Move::Scissors,
        Move::Lizard,
        Move::Spock,
        Move::Cheat,
    ];

    /// Name as typed and printed
    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
            Move::Lizard => "Lizard",
            Move::Spock => "Spock",
            Move::Cheat => "Cheat",
        }
    }

    /// The moves this one defeats.
    pub fn defeats(&self) -> &'static [Move] {
        match self {
            Move::Rock => &[Move::Scissors, Move::Lizard],
            Move::Paper => &[Move::Rock, Move::Spock],
            Move::Scissors => &[Move::Paper, Move::Lizard],
            Move::Lizard => &[Move::Paper, Move::Spock],
            Move::Spock => &[Move::Scissors, Move::Rock],
            Move::Cheat => &REAL_MOVES,
        }
    }

    /// Check if this move beats the other
    pub fn beats(&self, other: &Move) -> bool {
        self.defeats().contains(other)
    }

    /// Whether the opponent could have picked this move
    pub fn is_real(&self) -> bool {
        !matches!(self, Move::Cheat)
    }

    /// Pick a real move uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Move {
        REAL_MOVES[rng.gen_range(0..REAL_MOVES.len())]
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| MoveParseError(s.to_string()))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_no_move_beats_itself() {
        for m in Move::ALL {
            assert!(!m.beats(&m), "{m} beats itself");
        }
    }

    #[test]
    fn test_real_moves_beat_two_and_lose_to_two() {
        for m in REAL_MOVES {
            let wins = REAL_MOVES.iter().filter(|o| m.beats(o)).count();
            let losses = REAL_MOVES.iter().filter(|o| o.beats(&m)).count();
            assert_eq!(wins, 2, "{m} wins");
            assert_eq!(losses, 2, "{m} losses");
        }
    }

    #[test]
    fn test_real_pairs_have_exactly_one_winner() {
        for a in REAL_MOVES {
            for b in REAL_MOVES {
                if a != b {
                    assert!(a.beats(&b) ^ b.beats(&a), "{a} vs {b}");
                }
            }
        }
    }

    #[test]
    fn test_cheat_beats_every_real_move() {
        for m in REAL_MOVES {
            assert!(Move::Cheat.beats(&m));
            assert!(!m.beats(&Move::Cheat));
        }
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!("Lizard".parse::<Move>(), Ok(Move::Lizard));
        assert_eq!("Cheat".parse::<Move>(), Ok(Move::Cheat));
        assert!("rock".parse::<Move>().is_err());
        assert!(" Rock".parse::<Move>().is_err());
        assert_eq!(
            "Dynamite".parse::<Move>(),
            Err(MoveParseError("Dynamite".to_string()))
        );
    }

    #[test]
    fn test_display_matches_parse() {
        for m in Move::ALL {
            assert_eq!(m.to_string().parse::<Move>(), Ok(m));
        }
    }

    #[test]
    fn test_random_only_real_moves() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<Move> = (0..500).map(|_| Move::random(&mut rng)).collect();
        assert!(!seen.contains(&Move::Cheat));
        assert_eq!(seen.len(), REAL_MOVES.len());
    }

    #[test]
    fn test_serializes_as_name() {
        assert_eq!(serde_json::to_string(&Move::Spock).unwrap(), "\"Spock\"");
    }
}
