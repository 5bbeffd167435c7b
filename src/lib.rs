//! A blackjack scoring and round-resolution engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one player against an
//! automated dealer: it owns a shuffled multi-deck [`Shoe`], deals into two
//! [`Hand`]s, drives the player and dealer turns, and settles each round into
//! an [`Outcome`]. Input and output stay with the caller: decisions come in
//! through [`Decider`] (or the step methods), and everything that happens is
//! reported as [`RoundEvent`]s.
//!
//! # Example
//!
//! ```
//! use bjcore::{Decision, Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! game.deal().unwrap();
//! while game.state() == GameState::PlayerTurn {
//!     let decision = if game.player().score() < 17 { Decision::Hit } else { Decision::Stand };
//!     game.act(decision).unwrap();
//! }
//! if game.state() == GameState::DealerTurn {
//!     game.dealer_play().unwrap();
//! }
//! let outcome = game.settle().unwrap();
//! println!("{outcome:?}");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod decision;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use decision::{Decider, Decision};
pub use error::{
    ActionError, DealError, DealerError, InvalidDecision, OptionsError, ReshuffleError,
    RoundError, SettleError, ShoeExhausted,
};
pub use event::RoundEvent;
pub use game::{Game, GameState, RoundReport, TableView};
pub use hand::{BLACKJACK, Hand};
pub use options::GameOptions;
pub use result::{Outcome, RoundOutcome, Settlement, Winner, resolve};
pub use shoe::Shoe;
