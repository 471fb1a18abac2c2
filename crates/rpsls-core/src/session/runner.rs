//! The prompt/read/resolve loop.

use super::rounds::rounds_or_default;
use crate::config::GameConfig;
use crate::error::SessionError;
use crate::games::{resolve, Move, REAL_MOVES};
use crate::round::{Outcome, RoundRecord};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Everything that happened in one session
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub rounds: Vec<RoundRecord>,
    pub player_wins: u32,
    pub computer_wins: u32,
    pub draws: u32,
}

impl SessionSummary {
    fn record(&mut self, record: RoundRecord) {
        match record.outcome {
            Outcome::PlayerWins => self.player_wins += 1,
            Outcome::ComputerWins => self.computer_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.rounds.push(record);
    }

    /// Number of rounds actually played
    pub fn rounds_played(&self) -> usize {
        self.rounds.len()
    }
}

/// A game against the random opponent
pub struct Session<R> {
    config: GameConfig,
    rng: R,
}

impl<R: Rng> Session<R> {
    pub fn new(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Play a full session, reading the player's answers from `input` and
    /// writing the transcript to `output`.
    ///
    /// Closed input ends the session early; only I/O failures are errors.
    pub fn run<I: BufRead, O: Write>(
        &mut self,
        mut input: I,
        mut output: O,
    ) -> Result<SessionSummary, SessionError> {
        write!(output, "How many rounds do you want to play? ")?;
        output.flush()?;

        let answer = read_answer(&mut input)?.unwrap_or_default();
        let (rounds, rejected) = rounds_or_default(&answer, &self.config);
        if let Some(err) = rejected {
            warn!(%err, rounds, "falling back to default round count");
            writeln!(output, "Bad input: Using default of {rounds}")?;
        }
        info!(rounds, "session started");

        let mut summary = SessionSummary::default();
        for round in 1..=rounds {
            let Some(player) = prompt_move(&mut input, &mut output)? else {
                warn!(round, "input closed before the last round");
                break;
            };

            let opponent = Move::random(&mut self.rng);
            writeln!(output, "Computer move: {opponent}")?;

            let outcome = resolve(player, opponent);
            writeln!(output, "{outcome}")?;
            writeln!(output)?;

            debug!(round, %player, %opponent, ?outcome, "round played");
            summary.record(RoundRecord {
                round,
                player,
                opponent,
                outcome,
            });
        }

        writeln!(output, "Thanks for playing")?;
        output.flush()?;

        info!(
            played = summary.rounds_played(),
            player_wins = summary.player_wins,
            computer_wins = summary.computer_wins,
            draws = summary.draws,
            "session finished"
        );
        Ok(summary)
    }
}

/// Ask for a move until a valid one is entered. `None` means input closed.
fn prompt_move<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
) -> Result<Option<Move>, SessionError> {
    let listing = REAL_MOVES.map(|m| m.as_str()).join(", ");
    loop {
        writeln!(output, "Acceptable moves: {listing}")?;
        write!(output, "Move: ")?;
        output.flush()?;

        let Some(answer) = read_answer(input)? else {
            return Ok(None);
        };
        match answer.parse::<Move>() {
            Ok(m) => return Ok(Some(m)),
            Err(err) => {
                debug!(%err, "rejected move");
                writeln!(output, "Bad input")?;
            }
        }
    }
}

/// Read one line without its line ending. `None` at end of input.
///
/// Bytes that are not UTF-8 become replacement characters, so such a line
/// is rejected like any other unknown answer.
fn read_answer<I: BufRead>(input: &mut I) -> Result<Option<String>, SessionError> {
    let mut raw = Vec::new();
    if input.read_until(b'\n', &mut raw)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&raw);
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}
