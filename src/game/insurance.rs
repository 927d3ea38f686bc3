use crate::error::ActionError;

use super::{Game, INSURANCE_PAYS, Phase};

impl Game {
    /// Returns whether an insurance decision is currently awaited.
    ///
    /// Insurance is offered only when the dealer's up card is an ace, and
    /// must be decided before any other action for the round.
    #[must_use]
    pub const fn is_insurance_offered(&self) -> bool {
        self.insurance_pending
    }

    /// Accepts the insurance offer: a side bet of half the original stake.
    ///
    /// If the dealer holds a blackjack the side bet pays 2:1 and the round
    /// goes straight to reveal and settlement; otherwise the side stake is
    /// forfeited and play continues normally. A side stake the balance
    /// cannot cover (or one that rounds down to zero) is treated as a
    /// decline.
    ///
    /// # Errors
    ///
    /// Returns an error if no insurance decision is awaited.
    pub fn take_insurance(&mut self) -> Result<(), ActionError> {
        self.ensure_insurance_pending()?;
        self.insurance_pending = false;

        let stake = self.hands[0].stake() / 2;
        if stake > 0 && self.ledger.place_bet(stake) {
            self.insurance_stake = stake;

            if self.dealer_hand.is_blackjack() {
                self.ledger.settle_win(stake, INSURANCE_PAYS);
                self.finish_round();
                return Ok(());
            }
        }

        self.check_natural();
        Ok(())
    }

    /// Declines the insurance offer and continues normal play.
    ///
    /// A dealer blackjack is not revealed early on a decline; it wins at
    /// settlement by comparison like any other 21.
    ///
    /// # Errors
    ///
    /// Returns an error if no insurance decision is awaited.
    pub fn decline_insurance(&mut self) -> Result<(), ActionError> {
        self.ensure_insurance_pending()?;
        self.insurance_pending = false;
        self.check_natural();
        Ok(())
    }

    fn ensure_insurance_pending(&self) -> Result<(), ActionError> {
        if self.phase != Phase::Playing {
            return Err(ActionError::InvalidPhase);
        }
        if !self.insurance_pending {
            return Err(ActionError::InsuranceNotOffered);
        }
        Ok(())
    }
}
