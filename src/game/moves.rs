//! Move validation and application.
//!
//! Every move is validated in full before anything is written. A rejected
//! move returns `false` and leaves hands, elimination order, turn pointer
//! and history untouched. The rejection reason only goes to the log.

use tracing::debug;

use super::model::GameModel;
use crate::core::{Hand, HandId, Move, MoveRecord, PlayerId};

/// Validated writes for one move.
struct Plan {
    player: PlayerId,
    /// Replacement hands, already checked through `Hand::with_fingers`.
    updates: [Option<Hand>; 2],
}

impl GameModel {
    /// Tap `target` with the current player's `source` hand.
    ///
    /// Returns `true` if the tap was applied and the turn advanced.
    ///
    /// ```
    /// use chopsticks::{GameModel, HandId, PlayerId, TapRule, WinRule};
    ///
    /// let mut game = GameModel::make(2, TapRule::Cutoff, WinRule::Standard).unwrap();
    /// assert!(game.apply_tap(HandId::FIRST, (PlayerId::new(2), HandId::FIRST)));
    /// assert_eq!(game.hand(PlayerId::new(2), HandId::FIRST).unwrap().fingers_up(), 2);
    /// assert_eq!(game.current_player_id(), PlayerId::new(2));
    /// ```
    pub fn apply_tap(&mut self, source: HandId, target: (PlayerId, HandId)) -> bool {
        let mv = Move::tap(source, target.0, target.1);
        match self.plan_tap(source, target) {
            Ok(plan) => {
                self.commit(mv, plan, target.0);
                true
            }
            Err(reason) => {
                debug!(%mv, reason, "tap rejected");
                false
            }
        }
    }

    /// Move `amount` fingers from the current player's `source` hand to
    /// their `target` hand.
    ///
    /// Returns `true` if the split was applied and the turn advanced.
    pub fn apply_split(&mut self, source: HandId, target: HandId, amount: u8) -> bool {
        let mv = Move::split(source, target, amount);
        match self.plan_split(source, target, amount) {
            Ok(plan) => {
                let player = plan.player;
                self.commit(mv, plan, player);
                true
            }
            Err(reason) => {
                debug!(%mv, reason, "split rejected");
                false
            }
        }
    }

    /// Apply either kind of move.
    pub fn apply(&mut self, mv: &Move) -> bool {
        match *mv {
            Move::Tap {
                source,
                target_player,
                target_hand,
            } => self.apply_tap(source, (target_player, target_hand)),
            Move::Split {
                source,
                target,
                amount,
            } => self.apply_split(source, target, amount),
        }
    }

    /// Every move the current player can be offered: taps onto other
    /// players first, then splits. Empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }

        let mut moves = Vec::new();
        let targets = self.tap_targets();

        for source in self.tap_sources() {
            moves.extend(
                targets
                    .iter()
                    .map(|t| Move::tap(source.hand_id(), t.player_id(), t.hand_id())),
            );
        }

        for source in self.split_sources() {
            for target in self.split_targets(source.hand_id()) {
                let room = target.total_fingers() - target.fingers_up();
                moves.extend(
                    (1..source.fingers_up())
                        .take_while(|&amount| amount < room)
                        .map(|amount| Move::split(source.hand_id(), target.hand_id(), amount)),
                );
            }
        }

        moves
    }

    fn plan_tap(&self, source: HandId, target: (PlayerId, HandId)) -> Result<Plan, &'static str> {
        let player = self.current_player_id();
        let (target_player, target_id) = target;

        let source_hand = self.hand(player, source).ok_or("no such source hand")?;
        if source_hand.is_inactive() {
            return Err("source hand inactive");
        }
        let target_hand = self.hand(target_player, target_id).ok_or("no such target hand")?;
        if target_hand.is_inactive() {
            return Err("target hand inactive");
        }

        let fingers = self.config.tap_rule.resolve(
            target_hand.fingers_up(),
            source_hand.fingers_up(),
            target_hand.total_fingers(),
        );
        let new_target = target_hand
            .with_fingers(fingers)
            .map_err(|_| "tap result out of range")?;

        Ok(Plan {
            player,
            updates: [Some(new_target), None],
        })
    }

    fn plan_split(&self, source: HandId, target: HandId, amount: u8) -> Result<Plan, &'static str> {
        let player = self.current_player_id();

        if source == target {
            return Err("source and target are the same hand");
        }
        let source_hand = self.hand(player, source).ok_or("no such source hand")?;
        let target_hand = self.hand(player, target).ok_or("no such target hand")?;
        if source_hand.is_inactive() || target_hand.is_inactive() {
            return Err("hand inactive");
        }
        if amount == 0 {
            return Err("amount must be positive");
        }
        if source_hand.fingers_up() <= amount {
            return Err("source must keep a finger");
        }
        let received = match target_hand.fingers_up().checked_add(amount) {
            Some(fingers) if fingers < target_hand.total_fingers() => fingers,
            _ => return Err("target would overflow"),
        };

        let new_source = source_hand
            .with_fingers(source_hand.fingers_up() - amount)
            .map_err(|_| "source result out of range")?;
        let new_target = target_hand
            .with_fingers(received)
            .map_err(|_| "target result out of range")?;

        Ok(Plan {
            player,
            updates: [Some(new_source), Some(new_target)],
        })
    }

    /// Write a validated plan, then record the move and advance the turn.
    fn commit(&mut self, mv: Move, plan: Plan, affected: PlayerId) {
        for hand in plan.updates.into_iter().flatten() {
            if let (Some(hands), Some(slot)) = (self.hands.get_mut(hand.player_id()), hand.hand_id().slot()) {
                hands[slot] = hand;
            }
        }

        self.record_elimination(affected);

        let turn = self.turn_number();
        self.history.push_back(MoveRecord::new(plan.player, mv, turn));
        debug!(player = %plan.player, %mv, turn, "move applied");

        self.current = plan.player;
        self.advance_turn();
    }
}
