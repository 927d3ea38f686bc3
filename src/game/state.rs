//! Round phase and player action types.

/// Phase of the betting cycle.
///
/// A round moves `Betting -> Playing -> Dealer -> Settlement`, then returns
/// to `Betting` when the caller resets it. `Settlement` is the terminal
/// phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Accepting a bet for the next round.
    Betting,
    /// Waiting for player decisions.
    Playing,
    /// Dealer plays out their hand.
    Dealer,
    /// Round has settled; awaiting a reset.
    Settlement,
}

impl Phase {
    /// Returns whether the round has finished.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Settlement)
    }
}

/// A player decision, dispatched through [`Game::decide`](crate::Game::decide).
///
/// The enum is closed: every `(phase, action)` combination either applies
/// fully or is rejected with an explicit reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Draw a card into the current hand.
    Hit,
    /// End the current hand without drawing.
    Stand,
    /// Double the stake, draw exactly one card, end the hand.
    Double,
    /// Split a pair into two hands.
    Split,
    /// Accept the insurance offer.
    InsuranceYes,
    /// Decline the insurance offer.
    InsuranceNo,
}
