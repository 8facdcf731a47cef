//! # chopsticks
//!
//! Rules engine for Chopsticks, the finger-counting hand game, generalized
//! to N players.
//!
//! ## Design Principles
//!
//! 1. **Pure State Machine**: No I/O, no threads. Every operation either
//!    completes or is rejected without touching state.
//!
//! 2. **N-Player First**: Players are numbered `1..=n`; nothing assumes two.
//!
//! 3. **Configuration Over Convention**: The overflow policy (`TapRule`) and
//!    the win condition (`WinRule`) are chosen when the game is created.
//!
//! ## Modules
//!
//! - `core`: Player and hand ids, the `Hand` value, moves, config, errors
//! - `rules`: Tap overflow and winner decisions per variant
//! - `game`: `GameModel` and `GameBuilder`
//!
//! ## Example
//!
//! ```
//! use chopsticks::{GameModel, HandId, PlayerId, TapRule, WinRule};
//!
//! let mut game = GameModel::make(2, TapRule::Cutoff, WinRule::Standard).unwrap();
//!
//! // Player 1 taps player 2's first hand
//! assert!(game.apply_tap(HandId::FIRST, (PlayerId::new(2), HandId::FIRST)));
//! assert_eq!(game.current_player_id(), PlayerId::new(2));
//! assert_eq!(game.winner(), None);
//! ```

pub mod core;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    Hand, HandId, TOTAL_FINGERS,
    GameConfig, TapRule, WinRule,
    Move, MoveRecord,
    ConfigError, HandError, ParseRuleError,
};

pub use crate::game::{GameBuilder, GameModel, PlayerHands};
