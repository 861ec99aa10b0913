// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand values.
use std::{cmp::Ordering, fmt};
use thiserror::Error;

use drawdeck_cards::{CardError, CardId, Catalog};

use super::HandRank;

/// Errors returned by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The hand does not have exactly five distinct cards.
    #[error("expected 5 distinct cards, got {0}")]
    InvalidHandSize(usize),
    /// A card identifier is not in the catalog.
    #[error("unknown card id {0}")]
    UnknownCardId(u8),
}

impl From<CardError> for EvalError {
    fn from(err: CardError) -> Self {
        match err {
            CardError::UnknownCardId(id) => EvalError::UnknownCardId(id),
        }
    }
}

/// The value of a five cards hand.
///
/// Values compare by category first and then by the tie-break ranks, two
/// hands with the same category and ranks are equal whatever their suits.
#[derive(Debug, Clone, Copy)]
pub struct HandValue {
    rank: HandRank,
    kickers: [u8; 5],
    hand: [CardId; 5],
}

impl HandValue {
    /// The number of cards in an evaluated hand.
    pub const SIZE: usize = 5;

    /// Evaluates a hand of five distinct cards.
    pub fn eval(catalog: &Catalog, cards: &[CardId]) -> Result<Self, EvalError> {
        let hand = <[CardId; 5]>::try_from(cards)
            .map_err(|_| EvalError::InvalidHandSize(cards.len()))?;

        let distinct = hand
            .iter()
            .fold(0u64, |mask, id| mask | (1 << id.index()))
            .count_ones() as usize;
        if distinct != Self::SIZE {
            return Err(EvalError::InvalidHandSize(distinct));
        }

        let cards = hand.map(|id| *catalog.card(id));
        let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());

        // Group cards by rank with the ace playing high, the largest groups
        // first and higher ranks first within the same size.
        let mut counts = [0u8; 15];
        for card in &cards {
            counts[card.rank().high_value() as usize] += 1;
        }

        let mut groups = [(0u8, 0u8); 5];
        let mut num_groups = 0;
        for (value, &count) in counts.iter().enumerate() {
            if count > 0 {
                groups[num_groups] = (count, value as u8);
                num_groups += 1;
            }
        }
        let groups = &mut groups[..num_groups];
        groups.sort_unstable_by(|a, b| b.cmp(a));

        // A straight needs 5 distinct values, the ace is low unless the hand
        // is ten to ace.
        let mut values = cards.map(|c| c.value());
        values.sort_unstable();
        let straight_high = if values == [1, 10, 11, 12, 13] {
            Some(14)
        } else if num_groups == Self::SIZE && values[4] - values[0] == 4 {
            Some(values[4])
        } else {
            None
        };

        // Five distinct cards have at least two groups.
        let rank = match (straight_high, is_flush) {
            (Some(14), true) => HandRank::RoyalFlush,
            (Some(_), true) => HandRank::StraightFlush,
            _ => match (groups[0].0, groups[1].0) {
                (4, _) => HandRank::FourOfAKind,
                (3, 2) => HandRank::FullHouse,
                _ if is_flush => HandRank::Flush,
                _ if straight_high.is_some() => HandRank::Straight,
                (3, _) => HandRank::ThreeOfAKind,
                (2, 2) => HandRank::TwoPair,
                (2, _) => HandRank::OnePair,
                _ => HandRank::HighCard,
            },
        };

        let mut kickers = [0u8; 5];
        match (rank, straight_high) {
            (HandRank::Straight | HandRank::StraightFlush | HandRank::RoyalFlush, Some(high)) => {
                kickers[0] = high;
            }
            _ => {
                for (kicker, (_, value)) in kickers.iter_mut().zip(groups.iter()) {
                    *kicker = *value;
                }
            }
        }

        Ok(Self {
            rank,
            kickers,
            hand,
        })
    }

    /// Evaluates a hand given raw card identifiers.
    pub fn eval_raw(catalog: &Catalog, ids: &[u8]) -> Result<Self, EvalError> {
        let cards = ids
            .iter()
            .map(|&id| CardId::try_from(id))
            .collect::<Result<Vec<_>, _>>()?;
        Self::eval(catalog, &cards)
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The tie-break ranks, ace is 14 except in a five high straight.
    ///
    /// Ranks are ordered by group size and then by rank, unused trailing
    /// entries are zero.
    pub fn kickers(&self) -> &[u8] {
        let len = self.kickers.iter().take_while(|&&k| k > 0).count();
        &self.kickers[..len]
    }

    /// The evaluated cards.
    pub fn hand(&self) -> &[CardId] {
        &self.hand
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandValue {}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.kickers.cmp(&other.kickers))
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank)
    }
}
