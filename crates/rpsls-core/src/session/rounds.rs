//! Round-count input handling.

use crate::config::GameConfig;
use crate::error::RoundsError;

/// Parse a round count typed by the player.
///
/// Only plain ASCII digits are accepted, and the value must be below
/// `config.round_limit`. A trailing line ending is ignored.
pub fn parse_rounds(input: &str, config: &GameConfig) -> Result<u32, RoundsError> {
    let text = input.trim_end_matches(&['\r', '\n'][..]);
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RoundsError::NotANumber(text.to_string()));
    }

    // Digit strings too long for u32 are out of range as well.
    match text.parse::<u32>() {
        Ok(n) if n < config.round_limit => Ok(n),
        _ => Err(RoundsError::OutOfRange {
            value: text.to_string(),
            limit: config.round_limit,
        }),
    }
}

/// Parse a round count, falling back to `config.default_rounds`.
///
/// The rejection reason is handed back so the caller can warn about it.
pub fn rounds_or_default(input: &str, config: &GameConfig) -> (u32, Option<RoundsError>) {
    match parse_rounds(input, config) {
        Ok(n) => (n, None),
        Err(e) => (config.default_rounds, Some(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rounds(input: &str) -> u32 {
        rounds_or_default(input, &GameConfig::default()).0
    }

    #[test]
    fn test_valid_counts() {
        assert_eq!(rounds("5"), 5);
        assert_eq!(rounds("0"), 0);
        assert_eq!(rounds("99"), 99);
        assert_eq!(rounds("007\n"), 7);
        assert_eq!(rounds("12\r\n"), 12);
    }

    #[test]
    fn test_garbage_defaults() {
        assert_eq!(rounds("abc"), 3);
        assert_eq!(rounds(""), 3);
        assert_eq!(rounds("-1"), 3);
        assert_eq!(rounds(" 5"), 3);
        assert_eq!(rounds("4.0"), 3);
    }

    #[test]
    fn test_too_large_defaults() {
        assert_eq!(rounds("150"), 3);
        assert_eq!(rounds("100"), 3);
        assert_eq!(rounds("99999999999999999999"), 3);
    }

    #[test]
    fn test_error_kinds() {
        let cfg = GameConfig::default();
        assert_eq!(
            parse_rounds("abc", &cfg),
            Err(RoundsError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            parse_rounds("150", &cfg),
            Err(RoundsError::OutOfRange {
                value: "150".to_string(),
                limit: 100
            })
        );
    }

    #[test]
    fn test_custom_limits() {
        let cfg = GameConfig::default()
            .with_round_limit(10)
            .with_default_rounds(1);
        assert_eq!(rounds_or_default("9", &cfg).0, 9);
        assert_eq!(rounds_or_default("10", &cfg).0, 1);
    }
}
