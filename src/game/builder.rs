//! Builder for games, optionally starting from a preset position.

use crate::core::{ConfigError, GameConfig, HandId, PlayerId, TapRule, WinRule};

use super::model::GameModel;

/// Builder for creating a `GameModel`.
///
/// ```
/// use chopsticks::{GameBuilder, HandId, PlayerId, TapRule};
///
/// let game = GameBuilder::new()
///     .player_count(3)
///     .tap_rule(TapRule::Rollover)
///     .hand(PlayerId::new(2), HandId::FIRST, 4)
///     .current_player(PlayerId::new(2))
///     .build()
///     .unwrap();
///
/// assert_eq!(game.hand(PlayerId::new(2), HandId::FIRST).unwrap().fingers_up(), 4);
/// assert_eq!(game.current_player_id(), PlayerId::new(2));
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    presets: Vec<(PlayerId, HandId, u8)>,
    current: Option<PlayerId>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: GameConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn tap_rule(mut self, rule: TapRule) -> Self {
        self.config.tap_rule = rule;
        self
    }

    pub fn win_rule(mut self, rule: WinRule) -> Self {
        self.config.win_rule = rule;
        self
    }

    /// Preset a hand's finger count. Later presets for the same hand win.
    pub fn hand(mut self, player: PlayerId, hand: HandId, fingers: u8) -> Self {
        self.presets.push((player, hand, fingers));
        self
    }

    /// Preset the turn pointer. It may name a player with no active hand;
    /// `current_player_id` then resolves to the next player who has one.
    pub fn current_player(mut self, player: PlayerId) -> Self {
        self.current = Some(player);
        self
    }

    /// Build the game.
    ///
    /// Players left with no active hand by the presets are recorded as
    /// eliminated in ascending player order.
    pub fn build(self) -> Result<GameModel, ConfigError> {
        let mut game = GameModel::new(self.config)?;

        for (player, hand_id, fingers) in self.presets {
            let hands = game
                .hands
                .get_mut(player)
                .ok_or(ConfigError::UnknownPlayer(player))?;
            let slot = hand_id.slot().ok_or(ConfigError::UnknownHand(hand_id))?;
            hands[slot] = hands[slot].with_fingers(fingers)?;
        }

        if let Some(player) = self.current {
            if !game.hands.contains(player) {
                return Err(ConfigError::UnknownPlayer(player));
            }
            game.current = player;
        }

        for player in PlayerId::all(game.player_count()) {
            game.record_elimination(player);
        }

        Ok(game)
    }
}
