//! Tap overflow resolution.

use crate::core::TapRule;

impl TapRule {
    /// Finger count on the target after a tap adds `source` fingers to
    /// `target` fingers, out of `total`.
    ///
    /// Sums below `total` just accumulate. Otherwise `Cutoff` clamps to
    /// `total`; `Rollover` wraps modulo `total`, mapping an exact multiple to
    /// `total` rather than zero. The result is always in `1..=total` for
    /// positive inputs.
    ///
    /// ```
    /// use chopsticks::core::TapRule;
    ///
    /// assert_eq!(TapRule::Cutoff.resolve(3, 4, 5), 5);
    /// assert_eq!(TapRule::Rollover.resolve(3, 3, 5), 1);
    /// assert_eq!(TapRule::Rollover.resolve(3, 2, 5), 5);
    /// ```
    #[must_use]
    pub fn resolve(self, target: u8, source: u8, total: u8) -> u8 {
        let sum = target.saturating_add(source);
        if sum < total {
            return sum;
        }
        match self {
            TapRule::Cutoff => total,
            TapRule::Rollover => match sum % total {
                0 => total,
                rest => rest,
            },
        }
    }
}
