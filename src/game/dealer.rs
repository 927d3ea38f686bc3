use super::{EVEN_MONEY, Game, Phase};

/// Dealer stands on any total of 17 or more, soft 17 included.
const DEALER_STANDS_AT: u8 = 17;

impl Game {
    /// Plays out the dealer hand and settles every live player hand.
    ///
    /// The hole card is revealed, then the dealer draws while below 17.
    /// When every player hand has already busted there is nothing left to
    /// win, so the dealer does not draw at all.
    pub(super) fn finish_round(&mut self) {
        self.phase = Phase::Dealer;
        self.dealer_hand.reveal_hole();

        let any_live = self.hands.iter().any(|hand| !hand.is_bust());
        if any_live {
            while self.dealer_hand.score() < DEALER_STANDS_AT {
                let card = self.shoe.draw();
                self.dealer_hand.add_card(card);
            }
        }

        self.settle();
        self.phase = Phase::Settlement;
    }

    /// Applies exactly one ledger outcome per hand: dealer bust or a higher
    /// score wins even money, a lower score loses, a tie pushes. Hands that
    /// busted were already settled the moment they went over.
    fn settle(&mut self) {
        let dealer_score = self.dealer_hand.score();
        let dealer_bust = dealer_score > 21;

        for hand in &self.hands {
            let stake = hand.stake();
            let score = hand.score();

            if score > 21 {
                continue;
            }

            if dealer_bust || score > dealer_score {
                self.ledger.settle_win(stake, EVEN_MONEY);
            } else if score < dealer_score {
                self.ledger.settle_loss(stake);
            } else {
                self.ledger.settle_push(stake);
            }
        }

        self.ledger.record_round();
    }
}
