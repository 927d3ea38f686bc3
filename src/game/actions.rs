use crate::card::Card;
use crate::error::ActionError;
use crate::hand::Hand;
use crate::snapshot::Snapshot;

use super::{Action, Game, Phase};

impl Game {
    /// Dispatches one player decision and returns the resulting snapshot.
    ///
    /// Each decision is a single atomic transition: it fully applies or is
    /// rejected with a reason while the table stays unchanged. A snapshot
    /// whose phase is [`Phase::Settlement`] marks the end of the round.
    ///
    /// # Errors
    ///
    /// Returns the reason the transition was refused.
    pub fn decide(&mut self, action: Action) -> Result<Snapshot, ActionError> {
        match action {
            Action::Hit => {
                self.hit()?;
            }
            Action::Stand => self.stand()?,
            Action::Double => {
                self.double_down()?;
            }
            Action::Split => self.split()?,
            Action::InsuranceYes => self.take_insurance()?,
            Action::InsuranceNo => self.decline_insurance()?,
        }

        Ok(self.snapshot())
    }

    pub(super) fn ensure_playing(&self) -> Result<(), ActionError> {
        if self.phase != Phase::Playing {
            return Err(ActionError::InvalidPhase);
        }
        if self.insurance_pending {
            return Err(ActionError::InsurancePending);
        }
        Ok(())
    }

    /// Player action: draw a card into the current hand.
    ///
    /// A hand that busts forfeits its stake on the spot and the turn moves
    /// on; a hand that reaches exactly 21 is offered no further decisions
    /// and the turn moves on as well.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is accepting decisions or an insurance
    /// decision is pending.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_playing()?;

        let card = self.shoe.draw();
        let hand = &mut self.hands[self.current_hand];
        hand.add_card(card);

        let score = hand.score();
        if score > 21 {
            let stake = hand.stake();
            self.ledger.settle_loss(stake);
            self.advance_hand();
        } else if score == 21 {
            self.advance_hand();
        }

        Ok(card)
    }

    /// Player action: end the current hand without drawing.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is accepting decisions or an insurance
    /// decision is pending.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_playing()?;
        self.advance_hand();
        Ok(())
    }

    /// Player action: double the stake, draw exactly one card, and end the
    /// hand regardless of the result. A doubled hand never receives a
    /// second optional card.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is accepting decisions, an insurance
    /// decision is pending, the hand has more than two cards, or the
    /// balance does not cover an equal additional stake.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        self.ensure_playing()?;

        let hand = &self.hands[self.current_hand];
        if !hand.can_double() {
            return Err(ActionError::CannotDouble);
        }

        let stake = hand.stake();
        if !self.ledger.place_bet(stake) {
            return Err(ActionError::InsufficientFunds);
        }

        let card = self.shoe.draw();
        let hand = &mut self.hands[self.current_hand];
        hand.double_stake();
        hand.add_card(card);

        if hand.is_bust() {
            let stake = hand.stake();
            self.ledger.settle_loss(stake);
        }

        self.advance_hand();
        Ok(card)
    }

    /// Player action: split a pair into two hands played in order.
    ///
    /// The second card moves into a new hand inserted directly after the
    /// current one, each hand is dealt one fresh card, and the turn stays
    /// on the current hand; the new hand is played after it. Split hands
    /// behave like normal hands, aces included.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is accepting decisions, an insurance
    /// decision is pending, the cards are not a splittable pair, or the
    /// balance does not cover an equal additional stake.
    #[expect(
        clippy::missing_panics_doc,
        reason = "can_split is verified before take_split_card"
    )]
    pub fn split(&mut self) -> Result<(), ActionError> {
        self.ensure_playing()?;

        let hand = &self.hands[self.current_hand];
        if !hand.can_split() {
            return Err(ActionError::CannotSplit);
        }

        let stake = hand.stake();
        if !self.ledger.place_bet(stake) {
            return Err(ActionError::InsufficientFunds);
        }

        // Move the second card into the new hand as one atomic step on the
        // hand list, then give each hand a fresh card.
        let hand = &mut self.hands[self.current_hand];
        let moved = hand
            .take_split_card()
            .expect("can_split was verified above");
        hand.mark_from_split();

        let new_hand = Hand::from_split(moved, stake);
        self.hands.insert(self.current_hand + 1, new_hand);

        let card = self.shoe.draw();
        self.hands[self.current_hand].add_card(card);
        let card = self.shoe.draw();
        self.hands[self.current_hand + 1].add_card(card);

        Ok(())
    }

    /// Moves the turn to the next hand. When the index passes the end of
    /// the hand list, the dealer plays out and the round settles.
    pub(super) fn advance_hand(&mut self) {
        self.current_hand += 1;
        if self.current_hand >= self.hands.len() {
            self.finish_round();
        }
    }
}
