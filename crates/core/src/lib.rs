// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Drawdeck cards zones and game state.
//!
//! A [GameState] tracks where each of the 52 catalog cards is: in the stock,
//! in a player hand, in the discard pile or in the revealed cards. Cards move
//! between zones only through the game methods and every card is always in
//! exactly one zone:
//!
//! ```
//! # use std::sync::Arc;
//! # use drawdeck_core::{Catalog, GameState, HandRank};
//! let catalog = Arc::new(Catalog::new());
//! let mut game = GameState::new(2, catalog).unwrap();
//!
//! // Deal five cards to each player.
//! game.deal_round(5).unwrap();
//! assert_eq!(game.stock().len(), 42);
//!
//! // The first player changes two cards and the turn passes.
//! let discarded = game.exchange(2, &[0, 3]).unwrap();
//! assert_eq!(game.discard_pile(), discarded.as_slice());
//! assert_eq!(game.hand(0).unwrap().len(), 5);
//! assert_eq!(game.active_player(), 1);
//!
//! let value = game.evaluate(0).unwrap();
//! assert!(value.rank() >= HandRank::HighCard);
//! assert!(game.verify_integrity());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod error;
pub use error::{Error, Result};

pub mod game_state;
pub use game_state::GameState;

pub mod zones;
pub use zones::{Zone, Zones};

// Reexport cards and evaluator types.
pub use drawdeck_cards::{Card, CardId, Catalog, Rank, Suit};
pub use drawdeck_eval::{EvalError, HandRank, HandValue};
