// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories.
use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a five cards hand, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No pairs, no straight and no flush.
    HighCard,
    /// Two cards of the same rank.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards in sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight in one suit.
    StraightFlush,
    /// An ace high straight flush.
    RoyalFlush,
}

impl HandRank {
    /// The number of distinct five cards hands in a 52 cards deck.
    pub const TOTAL_HANDS: u32 = 2_598_960;

    /// Returns all the categories from weakest to strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The number of five cards hands in this category.
    pub fn combinations(&self) -> u32 {
        match self {
            HandRank::HighCard => 1_302_540,
            HandRank::OnePair => 1_098_240,
            HandRank::TwoPair => 123_552,
            HandRank::ThreeOfAKind => 54_912,
            HandRank::Straight => 10_200,
            HandRank::Flush => 5_108,
            HandRank::FullHouse => 3_744,
            HandRank::FourOfAKind => 624,
            HandRank::StraightFlush => 36,
            HandRank::RoyalFlush => 4,
        }
    }

    /// The chance of being dealt a hand in this category.
    pub fn probability(&self) -> f64 {
        self.combinations() as f64 / Self::TOTAL_HANDS as f64
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "high card",
            HandRank::OnePair => "one pair",
            HandRank::TwoPair => "two pair",
            HandRank::ThreeOfAKind => "three of a kind",
            HandRank::Straight => "straight",
            HandRank::Flush => "flush",
            HandRank::FullHouse => "full house",
            HandRank::FourOfAKind => "four of a kind",
            HandRank::StraightFlush => "straight flush",
            HandRank::RoyalFlush => "royal flush",
        };

        write!(f, "{name}")
    }
}
