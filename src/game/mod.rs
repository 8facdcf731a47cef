//! The Chopsticks game model.
//!
//! - `GameModel`: hands, turn pointer, elimination order; queries and moves
//! - `GameBuilder`: configuration plus preset positions

mod model;
mod moves;
mod builder;

pub use model::{GameModel, PlayerHands};
pub use builder::GameBuilder;
