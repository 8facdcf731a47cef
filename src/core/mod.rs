//! Core types: players, hands, moves, configuration, errors.
//!
//! Everything here is plain data. Game rules live in `rules` and `game`.

pub mod player;
pub mod hand;
pub mod config;
pub mod action;
pub mod error;

pub use player::{PlayerId, PlayerMap, MAX_PLAYERS};
pub use hand::{Hand, HandId, TOTAL_FINGERS};
pub use config::{GameConfig, TapRule, WinRule};
pub use action::{Move, MoveRecord};
pub use error::{ConfigError, HandError, ParseRuleError};
