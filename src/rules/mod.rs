//! Variant rules.
//!
//! The two rule sets chosen at construction are applied here as pure
//! functions over plain values:
//! - `TapRule::resolve`: finger count a tap leaves on its target
//! - `WinRule::winner`: who has won, if anyone

mod tap;
mod win;
