use crate::error::BetError;
use crate::hand::Hand;

use super::{BLACKJACK_PAYS, Game, Phase};

impl Game {
    /// Opens a round: debits the bet, deals the opening cards, and moves to
    /// the playing phase.
    ///
    /// The opening deal interleaves player-dealer-player-dealer. If the
    /// dealer's up card is an ace, an insurance decision is awaited before
    /// any other action; otherwise the natural blackjack check runs
    /// immediately and may settle the round on the spot.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not accepting bets, the bet is zero,
    /// or the bet exceeds the balance. A rejected bet leaves the table
    /// unchanged; the caller re-collects input.
    pub fn start_round(&mut self, bet: usize) -> Result<(), BetError> {
        if self.phase != Phase::Betting {
            return Err(BetError::InvalidPhase);
        }
        if bet == 0 {
            return Err(BetError::ZeroBet);
        }
        if !self.ledger.place_bet(bet) {
            return Err(BetError::InsufficientFunds);
        }

        self.hands.push(Hand::new(bet));
        self.current_hand = 0;

        let card = self.shoe.draw();
        self.hands[0].add_card(card);
        let card = self.shoe.draw();
        self.dealer_hand.add_card(card);
        let card = self.shoe.draw();
        self.hands[0].add_card(card);
        let card = self.shoe.draw();
        self.dealer_hand.add_card(card);

        self.phase = Phase::Playing;

        if self.dealer_hand.up_card().is_some_and(|c| c.rank == 1) {
            self.insurance_pending = true;
        } else {
            self.check_natural();
        }

        Ok(())
    }

    /// Settles a natural blackjack immediately: push against a dealer
    /// blackjack, 3:2 otherwise. No further decisions are offered.
    ///
    /// Runs right after the opening deal, or after the insurance decision
    /// when the dealer shows an ace. Does nothing when the opening hand is
    /// not a natural.
    pub(super) fn check_natural(&mut self) {
        if !self.hands[0].is_blackjack() {
            return;
        }
        let stake = self.hands[0].stake();

        if self.dealer_hand.is_blackjack() {
            self.ledger.settle_push(stake);
        } else {
            self.ledger.settle_win(stake, BLACKJACK_PAYS);
            self.ledger.record_blackjack();
        }

        self.dealer_hand.reveal_hole();
        self.ledger.record_round();
        self.phase = Phase::Settlement;
    }
}
