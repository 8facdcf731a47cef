//! Move representation.
//!
//! A move is either a tap (one of your hands onto any active hand) or a
//! split (fingers moved between your own two hands). Moves are plain data;
//! `GameModel` validates and applies them.

use serde::{Deserialize, Serialize};

use super::hand::HandId;
use super::player::PlayerId;

/// A complete game move for the current player.
///
/// ## Example
///
/// ```
/// use chopsticks::core::{HandId, Move, PlayerId};
///
/// // Tap player 2's first hand with our second hand
/// let tap = Move::tap(HandId::SECOND, PlayerId::new(2), HandId::FIRST);
///
/// // Move one finger from our first hand to our second
/// let split = Move::split(HandId::FIRST, HandId::SECOND, 1);
/// assert_ne!(tap, split);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Tap {
        source: HandId,
        target_player: PlayerId,
        target_hand: HandId,
    },
    Split {
        source: HandId,
        target: HandId,
        amount: u8,
    },
}

impl Move {
    #[must_use]
    pub const fn tap(source: HandId, target_player: PlayerId, target_hand: HandId) -> Self {
        Move::Tap {
            source,
            target_player,
            target_hand,
        }
    }

    #[must_use]
    pub const fn split(source: HandId, target: HandId, amount: u8) -> Self {
        Move::Split {
            source,
            target,
            amount,
        }
    }

    /// The acting player's hand that the move starts from.
    #[must_use]
    pub const fn source(&self) -> HandId {
        match self {
            Move::Tap { source, .. } | Move::Split { source, .. } => *source,
        }
    }

    #[must_use]
    pub const fn is_tap(&self) -> bool {
        matches!(self, Move::Tap { .. })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Tap {
                source,
                target_player,
                target_hand,
            } => write!(f, "tap {} -> {} {}", source, target_player, target_hand),
            Move::Split {
                source,
                target,
                amount,
            } => write!(f, "split {} from {} to {}", amount, source, target),
        }
    }
}

/// A successful move with metadata for history tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who made the move.
    pub player: PlayerId,

    /// The move made.
    pub mv: Move,

    /// Number of successful moves before this one.
    pub turn: usize,
}

impl MoveRecord {
    #[must_use]
    pub fn new(player: PlayerId, mv: Move, turn: usize) -> Self {
        Self { player, mv, turn }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_source() {
        let tap = Move::tap(HandId::SECOND, PlayerId::new(3), HandId::FIRST);
        let split = Move::split(HandId::FIRST, HandId::SECOND, 2);

        assert_eq!(tap.source(), HandId::SECOND);
        assert_eq!(split.source(), HandId::FIRST);
        assert!(tap.is_tap());
        assert!(!split.is_tap());
    }

    #[test]
    fn test_move_display() {
        let tap = Move::tap(HandId::FIRST, PlayerId::new(2), HandId::SECOND);
        assert_eq!(tap.to_string(), "tap Hand 1 -> Player 2 Hand 2");

        let split = Move::split(HandId::FIRST, HandId::SECOND, 2);
        assert_eq!(split.to_string(), "split 2 from Hand 1 to Hand 2");
    }

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord::new(
            PlayerId::new(1),
            Move::tap(HandId::FIRST, PlayerId::new(2), HandId::FIRST),
            4,
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
