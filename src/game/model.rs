//! Game model: state, queries, turn advancement.
//!
//! ## State
//!
//! - Two hands per player in a `PlayerMap`, slot 0 is hand 1
//! - A turn pointer that only moves via `advance_turn`
//! - Elimination order: each player appended once, the first time all of
//!   their hands are out
//! - History of successful moves, an `im::Vector` so snapshots clone cheaply
//!
//! Move application lives in `moves.rs`.

use std::collections::BTreeMap;

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{
    ConfigError, GameConfig, Hand, HandId, MoveRecord, PlayerId, PlayerMap, TapRule, WinRule,
};

/// Hands of one player, ordered by `HandId`.
pub type PlayerHands = SmallVec<[Hand; 2]>;

/// Complete state of one Chopsticks game.
///
/// Deserialization checks the snapshot is a state the engine could have
/// reached: valid config, hands in their own slots, turn pointer in range
/// and an elimination order matching the hands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameModelRepr")]
pub struct GameModel {
    pub(crate) config: GameConfig,

    /// Recorded turn pointer. May go stale; read through `current_player_id`.
    pub(crate) current: PlayerId,

    pub(crate) hands: PlayerMap<[Hand; 2]>,

    pub(crate) elimination_order: Vec<PlayerId>,

    pub(crate) history: Vector<MoveRecord>,
}

impl GameModel {
    /// Start a game with `n` players, each holding one finger up on both hands.
    ///
    /// ```
    /// use chopsticks::{GameModel, PlayerId, TapRule, WinRule};
    ///
    /// let game = GameModel::make(3, TapRule::Cutoff, WinRule::Standard).unwrap();
    /// assert_eq!(game.current_player_id(), PlayerId::new(1));
    /// assert!(GameModel::make(0, TapRule::Cutoff, WinRule::Standard).is_err());
    /// ```
    pub fn make(n: usize, tap_rule: TapRule, win_rule: WinRule) -> Result<Self, ConfigError> {
        Self::new(GameConfig::new(n, tap_rule, win_rule))
    }

    /// Start a game from a configuration.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let hands = PlayerMap::new(config.player_count, |player| {
            HandId::BOTH.map(|hand| Hand::new(hand, player))
        });

        debug!(
            players = config.player_count,
            tap_rule = %config.tap_rule,
            win_rule = %config.win_rule,
            "new game"
        );

        Ok(Self {
            config,
            current: PlayerId::new(1),
            hands,
            elimination_order: Vec::new(),
            history: Vector::new(),
        })
    }

    // === Configuration ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.config.player_count
    }

    #[must_use]
    pub fn tap_rule(&self) -> TapRule {
        self.config.tap_rule
    }

    #[must_use]
    pub fn win_rule(&self) -> WinRule {
        self.config.win_rule
    }

    // === Queries ===

    /// Player whose turn it is.
    ///
    /// If the recorded player has no active hand, this resolves to the next
    /// player who does. When nobody does, the recorded player is returned.
    #[must_use]
    pub fn current_player_id(&self) -> PlayerId {
        if self.has_active_hand(self.current) {
            return self.current;
        }
        self.next_active_after(self.current).unwrap_or(self.current)
    }

    /// Hands of `player` ordered by `HandId`; empty for unknown players.
    #[must_use]
    pub fn player_hands(&self, player: PlayerId) -> PlayerHands {
        self.hands
            .get(player)
            .map(|hands| SmallVec::from_slice(hands))
            .unwrap_or_default()
    }

    /// Hands of every player, keyed in ascending player order.
    #[must_use]
    pub fn all_player_hands(&self) -> BTreeMap<PlayerId, PlayerHands> {
        self.hands
            .iter()
            .map(|(player, hands)| (player, SmallVec::from_slice(hands)))
            .collect()
    }

    /// A single hand, if both ids exist.
    #[must_use]
    pub fn hand(&self, player: PlayerId, hand: HandId) -> Option<Hand> {
        let slot = hand.slot()?;
        self.hands.get(player).map(|hands| hands[slot])
    }

    /// Players with at least one active hand, ascending.
    #[must_use]
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.hands
            .player_ids()
            .filter(|&p| self.has_active_hand(p))
            .collect()
    }

    /// Knocked-out players in the order they went out.
    #[must_use]
    pub fn elimination_order(&self) -> &[PlayerId] {
        &self.elimination_order
    }

    /// Successful moves so far.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Number of successful moves so far.
    #[must_use]
    pub fn turn_number(&self) -> usize {
        self.history.len()
    }

    /// Winner under the configured `WinRule`, if decided.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.config
            .win_rule
            .winner(&self.active_players(), &self.elimination_order)
    }

    /// True once at most one player has an active hand.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.active_players().len() <= 1
    }

    /// Current player's hands that can give fingers away in a split.
    #[must_use]
    pub fn split_sources(&self) -> Vec<Hand> {
        self.player_hands(self.current_player_id())
            .into_iter()
            .filter(|h| can_donate(h))
            .collect()
    }

    /// Current player's hands that can receive fingers split from `source`.
    ///
    /// Empty when `source` cannot donate. A target must stay active after
    /// receiving one finger.
    #[must_use]
    pub fn split_targets(&self, source: HandId) -> Vec<Hand> {
        let player = self.current_player_id();
        match self.hand(player, source) {
            Some(h) if can_donate(&h) => {}
            _ => return Vec::new(),
        }

        self.player_hands(player)
            .into_iter()
            .filter(|h| h.hand_id() != source && h.is_active() && h.fingers_up() + 1 < h.total_fingers())
            .collect()
    }

    /// Current player's hands that can tap.
    #[must_use]
    pub fn tap_sources(&self) -> Vec<Hand> {
        self.player_hands(self.current_player_id())
            .into_iter()
            .filter(Hand::is_active)
            .collect()
    }

    /// Active hands of every other player, by player then hand.
    #[must_use]
    pub fn tap_targets(&self) -> Vec<Hand> {
        let player = self.current_player_id();
        self.hands
            .iter()
            .filter(|(p, _)| *p != player)
            .flat_map(|(_, hands)| hands.iter().copied())
            .filter(Hand::is_active)
            .collect()
    }

    // === Turn and elimination ===

    pub(crate) fn has_active_hand(&self, player: PlayerId) -> bool {
        self.hands
            .get(player)
            .is_some_and(|hands| hands.iter().any(Hand::is_active))
    }

    /// First player after `from` with an active hand, scanning each player
    /// once and ending on `from` itself.
    fn next_active_after(&self, from: PlayerId) -> Option<PlayerId> {
        let n = self.player_count();
        std::iter::successors(Some(from.next(n)), |p| Some(p.next(n)))
            .take(n)
            .find(|&p| self.has_active_hand(p))
    }

    /// Move the turn pointer to the next player with an active hand.
    ///
    /// Leaves it unchanged when no player has one.
    pub(crate) fn advance_turn(&mut self) {
        match self.next_active_after(self.current) {
            Some(next) => {
                trace!(from = %self.current, to = %next, "turn advanced");
                self.current = next;
            }
            None => trace!(at = %self.current, "no active players; turn not advanced"),
        }
    }

    /// Append `player` to the elimination order if all their hands are out
    /// and they are not already recorded.
    pub(crate) fn record_elimination(&mut self, player: PlayerId) {
        if !self.hands.contains(player)
            || self.has_active_hand(player)
            || self.elimination_order.contains(&player)
        {
            return;
        }
        self.elimination_order.push(player);
        debug!(
            player = %player,
            position = self.elimination_order.len(),
            "player eliminated"
        );
    }
}

/// Unchecked wire form of `GameModel`.
#[derive(Deserialize)]
struct GameModelRepr {
    config: GameConfig,
    current: PlayerId,
    hands: PlayerMap<[Hand; 2]>,
    elimination_order: Vec<PlayerId>,
    history: Vector<MoveRecord>,
}

impl TryFrom<GameModelRepr> for GameModel {
    type Error = ConfigError;

    fn try_from(repr: GameModelRepr) -> Result<Self, Self::Error> {
        repr.config.validate()?;

        let expected = repr.config.player_count;
        let found = repr.hands.player_count();
        if found != expected {
            return Err(ConfigError::HandCount { expected, found });
        }

        for (player, hands) in repr.hands.iter() {
            for (hand, id) in hands.iter().zip(HandId::BOTH) {
                if hand.player_id() != player || hand.hand_id() != id {
                    return Err(ConfigError::MisplacedHand(player, id));
                }
            }
        }

        if !repr.hands.contains(repr.current) {
            return Err(ConfigError::UnknownPlayer(repr.current));
        }

        let game = GameModel {
            config: repr.config,
            current: repr.current,
            hands: repr.hands,
            elimination_order: Vec::new(),
            history: repr.history,
        };

        for (i, &player) in repr.elimination_order.iter().enumerate() {
            if !game.hands.contains(player) {
                return Err(ConfigError::UnknownPlayer(player));
            }
            if repr.elimination_order[..i].contains(&player) {
                return Err(ConfigError::DuplicateElimination(player));
            }
            if game.has_active_hand(player) {
                return Err(ConfigError::EliminatedButActive(player));
            }
        }
        for player in game.hands.player_ids() {
            if !game.has_active_hand(player) && !repr.elimination_order.contains(&player) {
                return Err(ConfigError::UnrecordedElimination(player));
            }
        }

        Ok(GameModel {
            elimination_order: repr.elimination_order,
            ..game
        })
    }
}

/// A hand can donate in a split while active with more than one finger.
fn can_donate(hand: &Hand) -> bool {
    hand.is_active() && hand.fingers_up() > 1
}
