// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards shuffling.
use ahash::AHashSet;
use rand::{Rng, seq::SliceRandom};

use crate::CardId;

/// Returns a random permutation of the card ids that are not in `excluding`.
///
/// Every id in the catalog that is not excluded appears exactly once. The ids
/// are shuffled with Fisher-Yates so the call is linear in the number of ids
/// whatever values the random source returns.
pub fn random_permutation<R>(rng: &mut R, excluding: &AHashSet<CardId>) -> Vec<CardId>
where
    R: Rng + ?Sized,
{
    let mut ids = CardId::all()
        .filter(|id| !excluding.contains(id))
        .collect::<Vec<_>>();
    ids.shuffle(rng);
    ids
}

/// Riffles a pile of cards in place.
///
/// The pile is cut near the middle and the two halves are interleaved by
/// dropping small packets from each half in turn. Each packet holds at least
/// one card so the loop ends after at most `cards.len()` packets.
pub fn riffle<R>(rng: &mut R, cards: &mut Vec<CardId>)
where
    R: Rng + ?Sized,
{
    let len = cards.len();
    if len < 2 {
        return;
    }

    let spread = (len / 13).max(2);
    let half = len / 2;
    let cut = rng.random_range(half.saturating_sub(spread)..=(half + spread).min(len));

    let mut right = cards.split_off(cut);
    let mut left = std::mem::take(cards);
    cards.reserve(len);

    while !left.is_empty() || !right.is_empty() {
        for pile in [&mut left, &mut right] {
            let packet = rng.random_range(1..=spread).min(pile.len());
            cards.extend(pile.drain(..packet));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn permutation_covers_all_ids() {
        let mut rng = StdRng::seed_from_u64(7);
        let ids = random_permutation(&mut rng, &AHashSet::default());
        assert_eq!(ids.len(), Catalog::SIZE);

        let unique = ids.iter().copied().collect::<AHashSet<_>>();
        assert_eq!(unique.len(), Catalog::SIZE);

        let mut sorted = ids.clone();
        sorted.sort();
        assert!(sorted.into_iter().eq(CardId::all()));

        // A shuffled deck in catalog order is possible but not with this seed.
        assert!(!ids.iter().copied().eq(CardId::all()));
    }

    #[test]
    fn permutation_skips_excluded() {
        let mut rng = StdRng::seed_from_u64(11);
        let excluding = CardId::all().step_by(3).collect::<AHashSet<_>>();

        let ids = random_permutation(&mut rng, &excluding);
        assert_eq!(ids.len(), Catalog::SIZE - excluding.len());
        assert!(ids.iter().all(|id| !excluding.contains(id)));

        let unique = ids.iter().copied().collect::<AHashSet<_>>();
        assert_eq!(unique.len(), ids.len());

        let everything = CardId::all().collect::<AHashSet<_>>();
        assert!(random_permutation(&mut rng, &everything).is_empty());
    }

    #[test]
    fn permutation_is_deterministic_with_seed() {
        let make = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            random_permutation(&mut rng, &AHashSet::default())
        };
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }

    #[test]
    fn riffle_keeps_cards() {
        let mut rng = StdRng::seed_from_u64(3);

        for len in [0, 1, 2, 5, 13, 27, 52] {
            let mut cards = CardId::all().take(len).collect::<Vec<_>>();
            riffle(&mut rng, &mut cards);
            assert_eq!(cards.len(), len);

            cards.sort();
            assert!(cards.into_iter().eq(CardId::all().take(len)));
        }
    }

    #[test]
    fn riffle_changes_order() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut cards = CardId::all().collect::<Vec<_>>();

        // Seven riffles are more than enough to move some card.
        for _ in 0..7 {
            riffle(&mut rng, &mut cards);
        }

        assert!(!cards.iter().copied().eq(CardId::all()));
    }
}
