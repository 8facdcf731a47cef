//! Hand value type.
//!
//! A `Hand` is immutable. The only way to change a finger count is
//! `with_fingers`, which validates and returns a fresh value; owners replace
//! the old hand with the new one.
//!
//! ## Activity
//!
//! A hand is active while `0 < fingers_up < total_fingers`. Both extremes are
//! "out"; in practice the engine only ever produces the all-up state.

use serde::{Deserialize, Serialize};

use super::error::HandError;
use super::player::PlayerId;

/// Fingers on every hand.
pub const TOTAL_FINGERS: u8 = 5;

/// Hand slot identifier. Each player has hands 1 and 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandId(pub u8);

impl HandId {
    /// The first hand.
    pub const FIRST: HandId = HandId(1);
    /// The second hand.
    pub const SECOND: HandId = HandId(2);
    /// Both hand slots in ascending order.
    pub const BOTH: [HandId; 2] = [HandId::FIRST, HandId::SECOND];

    /// Create a new hand ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Storage slot (0 or 1) for a valid id.
    #[must_use]
    pub const fn slot(self) -> Option<usize> {
        match self.0 {
            1 => Some(0),
            2 => Some(1),
            _ => None,
        }
    }
}

impl std::fmt::Display for HandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hand {}", self.0)
    }
}

/// One of a player's two finger-count slots.
///
/// Deserialization runs the same checks as `with_fingers`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "HandRepr")]
pub struct Hand {
    hand_id: HandId,
    player_id: PlayerId,
    fingers_up: u8,
    total_fingers: u8,
}

impl Hand {
    /// A fresh hand with one finger up.
    #[must_use]
    pub const fn new(hand_id: HandId, player_id: PlayerId) -> Self {
        Self {
            hand_id,
            player_id,
            fingers_up: 1,
            total_fingers: TOTAL_FINGERS,
        }
    }

    #[must_use]
    pub const fn hand_id(&self) -> HandId {
        self.hand_id
    }

    #[must_use]
    pub const fn player_id(&self) -> PlayerId {
        self.player_id
    }

    #[must_use]
    pub const fn fingers_up(&self) -> u8 {
        self.fingers_up
    }

    #[must_use]
    pub const fn total_fingers(&self) -> u8 {
        self.total_fingers
    }

    /// Check if the hand can still act or be tapped.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        0 < self.fingers_up && self.fingers_up < self.total_fingers
    }

    #[must_use]
    pub const fn is_inactive(&self) -> bool {
        !self.is_active()
    }

    /// Return a copy of this hand with `fingers_up` fingers.
    ///
    /// Accepts `1..=total_fingers`; `total_fingers` yields an inactive hand.
    ///
    /// ```
    /// use chopsticks::core::{Hand, HandId, PlayerId};
    ///
    /// let hand = Hand::new(HandId::FIRST, PlayerId::new(1));
    /// assert_eq!(hand.with_fingers(3).unwrap().fingers_up(), 3);
    /// assert!(hand.with_fingers(5).unwrap().is_inactive());
    /// assert!(hand.with_fingers(0).is_err());
    /// assert!(hand.with_fingers(6).is_err());
    /// ```
    pub fn with_fingers(&self, fingers_up: u8) -> Result<Hand, HandError> {
        if fingers_up == 0 || fingers_up > self.total_fingers {
            return Err(HandError::InvalidFingerCount {
                requested: fingers_up,
                total: self.total_fingers,
            });
        }
        Ok(Hand { fingers_up, ..*self })
    }
}

/// Unchecked wire form of `Hand`.
#[derive(Deserialize)]
struct HandRepr {
    hand_id: HandId,
    player_id: PlayerId,
    fingers_up: u8,
    total_fingers: u8,
}

impl TryFrom<HandRepr> for Hand {
    type Error = HandError;

    fn try_from(repr: HandRepr) -> Result<Self, Self::Error> {
        if repr.total_fingers != TOTAL_FINGERS {
            return Err(HandError::InvalidTotal {
                total: repr.total_fingers,
                expected: TOTAL_FINGERS,
            });
        }
        Hand::new(repr.hand_id, repr.player_id).with_fingers(repr.fingers_up)
    }
}
