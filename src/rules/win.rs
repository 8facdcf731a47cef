//! Win detection.

use crate::core::{PlayerId, WinRule};

impl WinRule {
    /// Decide the winner.
    ///
    /// `active_players` lists players with at least one active hand in
    /// ascending order; `elimination_order` lists knocked-out players in the
    /// order they went out.
    ///
    /// ```
    /// use chopsticks::core::{PlayerId, WinRule};
    ///
    /// let p = PlayerId::new;
    /// assert_eq!(WinRule::Standard.winner(&[p(2)], &[p(1), p(3)]), Some(p(2)));
    /// assert_eq!(WinRule::MisereA.winner(&[p(2), p(3)], &[p(1)]), Some(p(1)));
    /// assert_eq!(WinRule::MisereB.winner(&[p(2)], &[p(1), p(3)]), Some(p(3)));
    /// ```
    #[must_use]
    pub fn winner(self, active_players: &[PlayerId], elimination_order: &[PlayerId]) -> Option<PlayerId> {
        match self {
            WinRule::Standard => match active_players {
                [sole] => Some(*sole),
                _ => None,
            },
            WinRule::MisereA => elimination_order.first().copied(),
            WinRule::MisereB => match active_players {
                [_] => elimination_order.last().copied(),
                _ => None,
            },
        }
    }
}
