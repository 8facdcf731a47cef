//! Game configuration types.
//!
//! Games are configured at construction by providing:
//! - `TapRule`: what happens when a tap reaches or passes the finger total
//! - `WinRule`: who wins, based on active players and elimination order
//! - `GameConfig`: player count plus both rules
//!
//! Both rule sets are closed enums; the engine matches on them exhaustively.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{ConfigError, ParseRuleError};
use super::player::MAX_PLAYERS;

/// Overflow policy for taps whose sum reaches the finger total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TapRule {
    /// Any sum at or above the total knocks the hand out.
    #[default]
    Cutoff,
    /// Sums wrap around modulo the total; an exact multiple knocks the hand out.
    Rollover,
}

/// Win-condition variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinRule {
    /// Last player with an active hand wins.
    #[default]
    Standard,
    /// First player eliminated wins, whether or not the game goes on.
    MisereA,
    /// Last player eliminated wins, once only one player remains active.
    MisereB,
}

/// Lowercase a rule name and drop separators, so "Misere A", "misere-a"
/// and "MISERE_A" all compare equal.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for TapRule {
    type Err = ParseRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "cutoff" => Ok(TapRule::Cutoff),
            "rollover" => Ok(TapRule::Rollover),
            _ => Err(ParseRuleError {
                kind: "tap",
                name: s.to_string(),
            }),
        }
    }
}

impl FromStr for WinRule {
    type Err = ParseRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "standard" => Ok(WinRule::Standard),
            "miserea" => Ok(WinRule::MisereA),
            "misereb" => Ok(WinRule::MisereB),
            _ => Err(ParseRuleError {
                kind: "win",
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for TapRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TapRule::Cutoff => write!(f, "Cutoff"),
            TapRule::Rollover => write!(f, "Rollover"),
        }
    }
}

impl std::fmt::Display for WinRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinRule::Standard => write!(f, "Standard"),
            WinRule::MisereA => write!(f, "Misere A"),
            WinRule::MisereB => write!(f, "Misere B"),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (1-255).
    pub player_count: usize,

    pub tap_rule: TapRule,

    pub win_rule: WinRule,
}

impl GameConfig {
    /// Create a new game configuration.
    #[must_use]
    pub fn new(player_count: usize, tap_rule: TapRule, win_rule: WinRule) -> Self {
        Self {
            player_count,
            tap_rule,
            win_rule,
        }
    }

    /// Check the configuration can start a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count == 0 || self.player_count > MAX_PLAYERS {
            return Err(ConfigError::InvalidPlayerCount(self.player_count));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(2, TapRule::default(), WinRule::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tap_rule() {
        assert_eq!("cutoff".parse::<TapRule>(), Ok(TapRule::Cutoff));
        assert_eq!("Rollover".parse::<TapRule>(), Ok(TapRule::Rollover));
        assert!("bounce".parse::<TapRule>().is_err());
    }

    #[test]
    fn test_parse_win_rule_spellings() {
        for name in ["Misere A", "misere-a", "MISERE_A", "miserea"] {
            assert_eq!(name.parse::<WinRule>(), Ok(WinRule::MisereA), "{}", name);
        }
        assert_eq!("misere b".parse::<WinRule>(), Ok(WinRule::MisereB));
        assert_eq!("standard".parse::<WinRule>(), Ok(WinRule::Standard));
        assert!("misere c".parse::<WinRule>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for rule in [WinRule::Standard, WinRule::MisereA, WinRule::MisereB] {
            assert_eq!(rule.to_string().parse::<WinRule>(), Ok(rule));
        }
        for rule in [TapRule::Cutoff, TapRule::Rollover] {
            assert_eq!(rule.to_string().parse::<TapRule>(), Ok(rule));
        }
    }

    #[test]
    fn test_validate_player_count() {
        assert!(GameConfig::default().validate().is_ok());
        assert!(GameConfig::new(1, TapRule::Cutoff, WinRule::Standard).validate().is_ok());
        assert_eq!(
            GameConfig::new(0, TapRule::Cutoff, WinRule::Standard).validate(),
            Err(ConfigError::InvalidPlayerCount(0))
        );
        assert_eq!(
            GameConfig::new(256, TapRule::Cutoff, WinRule::Standard).validate(),
            Err(ConfigError::InvalidPlayerCount(256))
        );
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::new(3, TapRule::Rollover, WinRule::MisereB);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
