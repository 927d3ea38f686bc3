//! Render-ready views of the table state.
//!
//! A [`Snapshot`] carries everything a presentation layer needs: cards,
//! derived scores, and eligibility flags. The presentation layer never has
//! to re-derive game rules itself.

use crate::card::Card;
use crate::game::Phase;
use crate::hand::HandStatus;
use crate::ledger::Statistics;

/// View of a single player hand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandView {
    /// Cards in the hand.
    pub cards: Vec<Card>,
    /// Derived score.
    pub score: u8,
    /// Stake riding on the hand.
    pub stake: usize,
    /// Derived status.
    pub status: HandStatus,
    /// Whether a double down would be accepted right now, funds included.
    pub can_double: bool,
    /// Whether a split would be accepted right now, funds included.
    pub can_split: bool,
    /// Whether the hand is a natural blackjack.
    pub is_blackjack: bool,
}

/// View of the dealer's hand.
///
/// While the hole card is hidden only the visible cards are included and
/// the score covers the up card alone.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DealerView {
    /// Visible cards.
    pub cards: Vec<Card>,
    /// Score of the visible cards.
    pub score: u8,
    /// Whether the second card is still face down.
    pub hole_hidden: bool,
}

/// Complete render-ready state of the table.
///
/// Requesting a snapshot never mutates the engine; two snapshots taken
/// without an intervening decision are identical.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// The dealer's hand.
    pub dealer: DealerView,
    /// Player hands, in play order.
    pub hands: Vec<HandView>,
    /// Index of the hand currently receiving decisions.
    pub current_hand: usize,
    /// Whether an insurance decision is awaited.
    pub insurance_offered: bool,
    /// Current balance.
    pub balance: usize,
    /// Current round phase.
    pub phase: Phase,
    /// Session statistics.
    pub statistics: Statistics,
}
