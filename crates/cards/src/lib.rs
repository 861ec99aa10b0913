// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Drawdeck cards types.
//!
//! This crate defines the immutable [Catalog] of the 52 cards, each card named
//! by a stable [CardId]:
//!
//! ```
//! # use drawdeck_cards::{Catalog, CardId, Rank, Suit};
//! let catalog = Catalog::new();
//! let ah = CardId::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.index(), 13);
//! assert_eq!(catalog.describe(ah), "AH");
//! assert!(catalog.card(CardId::new(Rank::King, Suit::Spades)).is_face());
//! ```
//!
//! and functions to shuffle card ids, for example to get all the cards that
//! are not in a hand in random order:
//!
//! ```
//! # use ahash::AHashSet;
//! # use drawdeck_cards::{CardId, random_permutation, riffle};
//! let mut rng = rand::rng();
//! let hand = CardId::all().take(5).collect::<AHashSet<_>>();
//!
//! let mut stock = random_permutation(&mut rng, &hand);
//! assert_eq!(stock.len(), 47);
//!
//! riffle(&mut rng, &mut stock);
//! assert_eq!(stock.len(), 47);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, CardError, CardId, Catalog, Rank, Suit};

mod deck;
pub use deck::{random_permutation, riffle};
