// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Drawdeck five cards poker hand evaluator.
//!
//! To use the evaluator pass five card ids and the catalog to [HandValue] to
//! evaluate the hand and get its rank:
//!
//! ```
//! # use drawdeck_eval::*;
//! let catalog = Catalog::new();
//!
//! // AS, 2S, .., 5S and 6S, .., 10S
//! let cards = CardId::all().take(10).collect::<Vec<_>>();
//! let v1 = HandValue::eval(&catalog, &cards[0..5]).unwrap();
//! let v2 = HandValue::eval(&catalog, &cards[5..]).unwrap();
//! assert_eq!(v1.rank(), HandRank::StraightFlush);
//! assert!(v2 > v1);
//!
//! // Hands must have five distinct cards.
//! let err = HandValue::eval(&catalog, &cards[0..4]).unwrap_err();
//! assert_eq!(err, EvalError::InvalidHandSize(4));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{EvalError, HandRank, HandValue};

// Reexport cards types.
pub use drawdeck_cards::{Card, CardId, Catalog, Rank, Suit};
