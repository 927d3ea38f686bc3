//! Round coordination and the action state machine.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::ResetError;
use crate::hand::{DealerHand, Hand, HandStatus};
use crate::ledger::{Ledger, Statistics};
use crate::options::GameOptions;
use crate::shoe::Shoe;
use crate::snapshot::{DealerView, HandView, Snapshot};

mod actions;
mod bet;
mod dealer;
mod insurance;
pub mod state;

pub use state::{Action, Phase};

/// Even-money payout multiplier.
const EVEN_MONEY: f64 = 1.0;
/// Natural blackjack pays 3:2.
const BLACKJACK_PAYS: f64 = 1.5;
/// A winning insurance side bet pays 2:1.
const INSURANCE_PAYS: f64 = 2.0;

/// A single-player blackjack table.
///
/// The table owns the shoe, the ledger, and the per-round state, and drives
/// the betting cycle `Betting -> Playing -> Dealer -> Settlement`. Dealer
/// play and settlement run synchronously as soon as the last player hand
/// finishes, so a caller only ever observes `Betting`, `Playing`, and
/// `Settlement` between calls.
///
/// The engine holds no ambient state and performs no I/O; a deployment
/// serving several simultaneous games gives each its own `Game`.
pub struct Game {
    /// Cards in the shoe, shared across rounds.
    pub shoe: Shoe,
    /// Game options.
    pub options: GameOptions,
    /// Session balance and statistics.
    ledger: Ledger,
    /// Current round phase.
    phase: Phase,
    /// Player hands, in play order; splits insert in place.
    hands: Vec<Hand>,
    /// Dealer's hand.
    dealer_hand: DealerHand,
    /// Index of the hand currently receiving decisions.
    current_hand: usize,
    /// Insurance side stake for the round, if one was placed.
    insurance_stake: usize,
    /// Whether an insurance decision is awaited before normal play.
    insurance_pending: bool,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use twentyone::{Game, GameOptions};
    ///
    /// let options = GameOptions::default();
    /// let game = Game::new(options, 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(seed);

        Self {
            shoe: Shoe::new(options.decks, rng),
            ledger: Ledger::new(options.starting_balance),
            options,
            phase: Phase::Betting,
            hands: Vec::new(),
            dealer_hand: DealerHand::new(),
            current_hand: 0,
            insurance_stake: 0,
            insurance_pending: false,
        }
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.ledger.balance()
    }

    /// Returns the session statistics.
    #[must_use]
    pub const fn statistics(&self) -> Statistics {
        self.ledger.statistics()
    }

    /// Returns the player hands of the current round, in play order.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the index of the hand currently receiving decisions.
    #[must_use]
    pub const fn current_hand(&self) -> usize {
        self.current_hand
    }

    /// Returns the insurance side stake placed this round, if any.
    #[must_use]
    pub const fn insurance_stake(&self) -> usize {
        self.insurance_stake
    }

    /// Returns a render-ready view of the table.
    ///
    /// The dealer's hole card is omitted and flagged hidden until the dealer
    /// reveals it. Requesting a snapshot never mutates the engine, so
    /// repeated calls without an intervening decision return identical data.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let hole_hidden = !self.dealer_hand.is_hole_revealed();
        let dealer_cards: Vec<Card> = if hole_hidden {
            self.dealer_hand.up_card().into_iter().copied().collect()
        } else {
            self.dealer_hand.cards().to_vec()
        };
        let dealer = DealerView {
            cards: dealer_cards,
            score: self.dealer_hand.visible_score(),
            hole_hidden,
        };

        let hands = self
            .hands
            .iter()
            .enumerate()
            .map(|(index, hand)| {
                let actionable = self.phase == Phase::Playing
                    && !self.insurance_pending
                    && index == self.current_hand;
                let funded = self.ledger.balance() >= hand.stake();

                HandView {
                    cards: hand.cards().to_vec(),
                    score: hand.score(),
                    stake: hand.stake(),
                    status: self.hand_status(index),
                    can_double: actionable && funded && hand.can_double(),
                    can_split: actionable && funded && hand.can_split(),
                    is_blackjack: hand.is_blackjack(),
                }
            })
            .collect();

        Snapshot {
            dealer,
            hands,
            current_hand: self.current_hand,
            insurance_offered: self.insurance_pending,
            balance: self.ledger.balance(),
            phase: self.phase,
            statistics: self.ledger.statistics(),
        }
    }

    /// Derives the status of the hand at `index`. Status is never stored.
    fn hand_status(&self, index: usize) -> HandStatus {
        let hand = &self.hands[index];
        if hand.is_bust() {
            HandStatus::Bust
        } else if hand.is_blackjack() {
            HandStatus::Blackjack
        } else if self.phase != Phase::Playing || index < self.current_hand {
            HandStatus::Stood
        } else {
            HandStatus::Active
        }
    }

    /// Clears the settled round and returns to the betting phase.
    ///
    /// The shoe and the ledger persist across rounds.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not reached settlement.
    pub fn reset_round(&mut self) -> Result<(), ResetError> {
        if self.phase != Phase::Settlement {
            return Err(ResetError::InvalidPhase);
        }

        self.hands.clear();
        self.dealer_hand.clear();
        self.current_hand = 0;
        self.insurance_stake = 0;
        self.insurance_pending = false;
        self.phase = Phase::Betting;

        Ok(())
    }
}
