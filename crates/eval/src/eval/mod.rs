// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator classifies a five cards hand by checking the suits for a
//! flush, the sorted values for a straight and the rank counts for groupings,
//! then picks the strongest category:
//!
//! ```text
//!   straight flush (royal if ace high) > four of a kind > full house
//!   > flush > straight > three of a kind > two pair > one pair > high card
//! ```
//!
//! It provides [HandValue::eval] that computes a [HandValue] that can be
//! compared with other hands values, and [HandRank::combinations] to get how
//! many hands of a category are in a deck.

mod rank;
pub use rank::HandRank;

mod value;
pub use value::{EvalError, HandValue};
