//! Error types.
//!
//! Rejected moves are not errors: `apply_tap` / `apply_split` report them as
//! `false`. Errors here cover the value-level setter, game construction and
//! loading serialized state.

use thiserror::Error;

use super::hand::HandId;
use super::player::{PlayerId, MAX_PLAYERS};

/// Failure to produce a new hand value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandError {
    #[error("invalid finger count {requested}: must be between 1 and {total}")]
    InvalidFingerCount { requested: u8, total: u8 },

    #[error("invalid finger total {total}: every hand has {expected}")]
    InvalidTotal { total: u8, expected: u8 },
}

/// Unrecognized rule name when parsing a `TapRule` or `WinRule`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} rule: {name:?}")]
pub struct ParseRuleError {
    pub kind: &'static str,
    pub name: String,
}

/// Failure to set up a game or load one from serialized state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid player count {0}: must be between 1 and {max}", max = MAX_PLAYERS)]
    InvalidPlayerCount(usize),

    #[error("{0} is not in this game")]
    UnknownPlayer(PlayerId),

    #[error("{0} does not exist")]
    UnknownHand(HandId),

    #[error(transparent)]
    Hand(#[from] HandError),

    #[error("expected hands for {expected} players, found {found}")]
    HandCount { expected: usize, found: usize },

    #[error("{1} of {0} is stored in the wrong slot")]
    MisplacedHand(PlayerId, HandId),

    #[error("{0} is eliminated more than once")]
    DuplicateElimination(PlayerId),

    #[error("{0} is recorded as eliminated but has an active hand")]
    EliminatedButActive(PlayerId),

    #[error("{0} has no active hand but is not recorded as eliminated")]
    UnrecordedElimination(PlayerId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = HandError::InvalidFingerCount { requested: 0, total: 5 };
        assert_eq!(err.to_string(), "invalid finger count 0: must be between 1 and 5");

        assert_eq!(
            ConfigError::UnknownPlayer(PlayerId::new(4)).to_string(),
            "Player 4 is not in this game"
        );
        assert_eq!(ConfigError::UnknownHand(HandId::new(3)).to_string(), "Hand 3 does not exist");
    }

    #[test]
    fn test_player_count_message_uses_limit() {
        let err = ConfigError::InvalidPlayerCount(0);
        assert_eq!(
            err.to_string(),
            format!("invalid player count 0: must be between 1 and {}", MAX_PLAYERS)
        );
    }

    #[test]
    fn test_snapshot_error_messages() {
        assert_eq!(
            ConfigError::MisplacedHand(PlayerId::new(2), HandId::new(1)).to_string(),
            "Hand 1 of Player 2 is stored in the wrong slot"
        );
        assert_eq!(
            HandError::InvalidTotal { total: 7, expected: 5 }.to_string(),
            "invalid finger total 7: every hand has 5"
        );
    }

    #[test]
    fn test_parse_rule_error_message() {
        let err = ParseRuleError { kind: "tap", name: "bounce".to_string() };
        assert_eq!(err.to_string(), "unknown tap rule: \"bounce\"");
    }

    #[test]
    fn test_hand_error_converts() {
        let err: ConfigError = HandError::InvalidFingerCount { requested: 9, total: 5 }.into();
        assert!(matches!(err, ConfigError::Hand(_)));
    }
}
