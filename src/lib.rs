//! A single-player blackjack game engine.
//!
//! The crate provides a [`Game`] type that drives the full betting cycle:
//! betting, the opening deal, insurance, player actions (hit, stand, double
//! down, split), dealer play, and settlement. The engine performs no I/O:
//! a presentation layer feeds decisions in as [`Action`] values and renders
//! the [`Snapshot`] it gets back.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{Game, GameOptions};
//!
//! let options = GameOptions::default();
//! let mut game = Game::new(options, 42);
//! let _ = game.start_round(100);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod shoe;
pub mod snapshot;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{ActionError, BetError, ResetError};
pub use game::{Action, Game, Phase};
pub use hand::{DealerHand, Hand, HandStatus};
pub use ledger::{Ledger, Statistics};
pub use options::GameOptions;
pub use shoe::{RESHUFFLE_THRESHOLD, Shoe};
pub use snapshot::{DealerView, HandView, Snapshot};
