//! Game configuration.

/// Limits applied to a session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Rounds played when the entered count is rejected.
    pub default_rounds: u32,
    /// Entered round counts must be strictly below this.
    pub round_limit: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_rounds: 3,
            round_limit: 100,
        }
    }
}

impl GameConfig {
    /// Set the fallback round count.
    pub fn with_default_rounds(mut self, rounds: u32) -> Self {
        self.default_rounds = rounds;
        self
    }

    /// Set the exclusive upper bound on entered round counts.
    pub fn with_round_limit(mut self, limit: u32) -> Self {
        self.round_limit = limit;
        self
    }
}
