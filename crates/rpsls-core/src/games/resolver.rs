//! Round resolution over the static beats relation.

use super::moves::Move;
use crate::round::Outcome;
use tracing::debug;

/// Stateless judge for a single round
pub struct Resolver;

impl Resolver {
    /// Decide a round from the player's point of view.
    ///
    /// `opponent` must be a real move; the session never draws Cheat for
    /// the computer. Debug builds panic on a Cheat opponent unless the
    /// player also played Cheat, which is a draw like any identical pair.
    pub fn judge(player: Move, opponent: Move) -> Outcome {
        let outcome = if player == opponent {
            Outcome::Draw
        } else {
            debug_assert!(opponent.is_real(), "opponent played {opponent}");
            if player.beats(&opponent) {
                Outcome::PlayerWins
            } else {
                Outcome::ComputerWins
            }
        };
        debug!(%player, %opponent, ?outcome, "resolved round");
        outcome
    }
}

/// Shorthand for [`Resolver::judge`].
pub fn resolve(player: Move, opponent: Move) -> Outcome {
    Resolver::judge(player, opponent)
}
