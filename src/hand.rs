//! Player and dealer hand representations.

use crate::card::Card;

/// Blackjack value of a rank before ace resolution (an ace counts as 11).
pub(crate) const fn card_value(rank: u8) -> u8 {
    match rank {
        1 => 11,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

/// Scores a set of cards: every ace starts at 11 and aces are demoted to 1
/// one at a time while the total exceeds 21. The result is independent of
/// card order. Also reports whether the hand is soft (an ace still at 11).
fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == 1 {
            aces += 1;
        }
        value = value.saturating_add(card_value(card.rank));
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// Derived status of a player hand within a round.
///
/// Status is never stored; it is computed from the cards and the position
/// of the round's current-hand index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandStatus {
    /// Hand is still receiving decisions.
    Active,
    /// The turn has moved past this hand.
    Stood,
    /// Hand has busted (over 21).
    Bust,
    /// Hand is a natural blackjack.
    Blackjack,
}

/// One betting position: an ordered sequence of cards plus the stake on it.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Stake currently riding on this hand.
    stake: usize,
    /// Whether this hand came out of a split.
    from_split: bool,
}

impl Hand {
    /// Creates a new empty hand with the given stake.
    #[must_use]
    pub const fn new(stake: usize) -> Self {
        Self {
            cards: Vec::new(),
            stake,
            from_split: false,
        }
    }

    /// Creates a new single-card hand produced by a split.
    #[must_use]
    pub fn from_split(card: Card, stake: usize) -> Self {
        Self {
            cards: vec![card],
            stake,
            from_split: true,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the stake riding on this hand.
    #[must_use]
    pub const fn stake(&self) -> usize {
        self.stake
    }

    /// Doubles the stake (double down).
    pub const fn double_stake(&mut self) {
        self.stake *= 2;
    }

    /// Returns whether this hand came out of a split.
    #[must_use]
    pub const fn is_from_split(&self) -> bool {
        self.from_split
    }

    /// Calculates the score of the hand.
    ///
    /// Aces count as 11 where possible without busting, otherwise as 1.
    #[must_use]
    pub fn score(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand has busted.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > 21
    }

    /// Returns whether the hand is a natural blackjack: exactly two cards
    /// scoring 21 on a hand that did not come out of a split.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && !self.from_split && self.score() == 21
    }

    /// Returns whether the hand may double down (exactly two cards).
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.cards.len() == 2
    }

    /// Returns whether the hand may split: exactly two cards of equal
    /// blackjack value. Ten-value ranks count as equal to each other, so a
    /// king and a queen are splittable.
    #[must_use]
    pub fn can_split(&self) -> bool {
        match self.cards.as_slice() {
            [first, second] => card_value(first.rank) == card_value(second.rank),
            _ => false,
        }
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the second card (for splitting).
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }

    /// Marks the hand as split-derived, barring it from counting as a
    /// natural blackjack.
    pub(crate) const fn mark_from_split(&mut self) {
        self.from_split = true;
    }
}

/// The dealer's hand.
#[derive(Debug, Clone)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible score (only the up card while the hole card
    /// is hidden).
    #[must_use]
    pub fn visible_score(&self) -> u8 {
        if self.hole_revealed {
            self.score()
        } else {
            self.cards.first().map_or(0, |c| card_value(c.rank))
        }
    }

    /// Calculates the full score of the hand.
    #[must_use]
    pub fn score(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score() == 21
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > 21
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}
