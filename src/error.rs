//! Error types for engine operations.
//!
//! Every variant is a reason code for a rejected transition; a returned
//! error always leaves the engine state untouched.

use thiserror::Error;

/// Errors that can occur when opening a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// A round is already in progress.
    #[error("table is not accepting bets")]
    InvalidPhase,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet exceeds the available balance.
    #[error("bet exceeds available balance")]
    InsufficientFunds,
}

/// Errors that can occur during player decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No round is accepting decisions.
    #[error("no round is accepting decisions")]
    InvalidPhase,
    /// An insurance decision must be made first.
    #[error("an insurance decision is pending")]
    InsurancePending,
    /// Insurance is not currently on offer.
    #[error("insurance is not on offer")]
    InsuranceNotOffered,
    /// The current hand is not eligible to double down.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// The current hand is not eligible to split.
    #[error("cannot split this hand")]
    CannotSplit,
    /// The balance does not cover the additional stake.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
}

/// Errors that can occur when resetting for the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResetError {
    /// The round has not been settled yet.
    #[error("round is not settled")]
    InvalidPhase,
}
