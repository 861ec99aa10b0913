// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards zones.
use ahash::AHashSet;
use log::debug;
use rand::Rng;
use std::fmt;

use drawdeck_cards::{CardId, Catalog, random_permutation, riffle};

use crate::error::{Error, Result};

/// A zone holding cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// The face down draw pile.
    Stock,
    /// A player hand.
    Hand(usize),
    /// The discard pile.
    DiscardPile,
    /// The revealed cards area.
    Revealed,
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Stock => write!(f, "stock"),
            Zone::Hand(player) => write!(f, "hand {player}"),
            Zone::DiscardPile => write!(f, "discard pile"),
            Zone::Revealed => write!(f, "revealed"),
        }
    }
}

/// The partition of the catalog cards into zones.
///
/// Every card is in exactly one zone, cards only move between zones through
/// the methods of this type and a method that returns an error leaves all
/// zones unchanged. Each zone is an ordered sequence, the top of the stock is
/// its last card.
#[derive(Debug, Clone)]
pub struct Zones {
    stock: Vec<CardId>,
    hands: Vec<Vec<CardId>>,
    discard_pile: Vec<CardId>,
    revealed: Vec<CardId>,
}

impl Zones {
    /// Creates zones for the given number of players with all the cards in a
    /// stock in the given order.
    pub(crate) fn new(players: usize, stock: Vec<CardId>) -> Self {
        let zones = Self {
            stock,
            hands: vec![Vec::default(); players],
            discard_pile: Vec::default(),
            revealed: Vec::default(),
        };
        debug_assert!(zones.verify_integrity());
        zones
    }

    /// The number of hands.
    pub fn players(&self) -> usize {
        self.hands.len()
    }

    /// The stock cards, the last card is the top.
    pub fn stock(&self) -> &[CardId] {
        &self.stock
    }

    /// A player hand.
    pub fn hand(&self, player: usize) -> Result<&[CardId]> {
        self.hands
            .get(player)
            .map(Vec::as_slice)
            .ok_or(Error::UnknownPlayer(player))
    }

    /// The discard pile, the last card is the most recent discard.
    pub fn discard_pile(&self) -> &[CardId] {
        &self.discard_pile
    }

    /// The revealed cards.
    pub fn revealed(&self) -> &[CardId] {
        &self.revealed
    }

    /// Returns the zone that holds a card.
    pub fn locate(&self, id: CardId) -> Option<Zone> {
        if self.stock.contains(&id) {
            Some(Zone::Stock)
        } else if let Some(player) = self.hands.iter().position(|h| h.contains(&id)) {
            Some(Zone::Hand(player))
        } else if self.discard_pile.contains(&id) {
            Some(Zone::DiscardPile)
        } else if self.revealed.contains(&id) {
            Some(Zone::Revealed)
        } else {
            None
        }
    }

    /// Checks that every catalog card is in exactly one zone.
    pub fn verify_integrity(&self) -> bool {
        let mut seen = AHashSet::with_capacity(Catalog::SIZE);
        let all = self
            .stock
            .iter()
            .chain(self.hands.iter().flatten())
            .chain(self.discard_pile.iter())
            .chain(self.revealed.iter());

        for id in all {
            if !seen.insert(*id) {
                return false;
            }
        }

        seen.len() == Catalog::SIZE
    }

    /// Deals `count` cards from the top of the stock to a player hand.
    ///
    /// Fails with [Error::InsufficientStock] if the stock has fewer cards.
    pub fn deal(&mut self, player: usize, count: usize) -> Result<Vec<CardId>> {
        self.check_player(player)?;

        let available = self.stock.len();
        if count > available {
            return Err(Error::InsufficientStock {
                requested: count,
                available,
            });
        }

        let dealt = self.move_from_stock(player, count);
        debug!("Dealt {count} cards to player {player}");
        Ok(dealt)
    }

    /// Deals `count` cards to each player one card at a time, starting from the
    /// first player.
    pub fn deal_round(&mut self, count: usize) -> Result<()> {
        let requested = count.saturating_mul(self.players());
        let available = self.stock.len();
        if requested > available {
            return Err(Error::InsufficientStock {
                requested,
                available,
            });
        }

        for _ in 0..count {
            for hand in self.hands.iter_mut() {
                if let Some(id) = self.stock.pop() {
                    hand.push(id);
                }
            }
        }

        debug!("Dealt {count} cards to {} players", self.players());
        debug_assert!(self.verify_integrity());
        Ok(())
    }

    /// Draws `count` cards from the top of the stock to a player hand.
    ///
    /// The draw is all or nothing: if the stock has fewer than `count` cards it
    /// fails with [Error::EmptyStock] and no card moves, otherwise it returns
    /// the number of cards drawn.
    pub fn draw(&mut self, player: usize, count: usize) -> Result<usize> {
        self.check_player(player)?;
        self.check_draw(count)?;
        self.move_from_stock(player, count);
        debug!("Player {player} drew {count} cards");
        Ok(count)
    }

    /// Moves the card at `index` in a player hand to the discard pile.
    pub fn discard(&mut self, player: usize, index: usize) -> Result<CardId> {
        let id = self.take(player, index)?;
        self.discard_pile.push(id);
        debug!("Player {player} discarded card {id}");
        debug_assert!(self.verify_integrity());
        Ok(id)
    }

    /// Moves the card at `index` in a player hand to the revealed cards.
    pub fn reveal(&mut self, player: usize, index: usize) -> Result<CardId> {
        let id = self.take(player, index)?;
        self.revealed.push(id);
        debug!("Player {player} revealed card {id}");
        debug_assert!(self.verify_integrity());
        Ok(id)
    }

    /// Discards the cards at `indices` from a player hand and draws `count`
    /// replacements.
    ///
    /// All the indices and the stock size are checked before moving any card.
    /// Discarded cards go on the discard pile in hand order and are returned.
    pub fn exchange(
        &mut self,
        player: usize,
        count: usize,
        indices: &[usize],
    ) -> Result<Vec<CardId>> {
        let len = self.hand(player)?.len();
        if let Some(&index) = indices.iter().find(|&&index| index >= len) {
            return Err(Error::IndexOutOfRange { index, len });
        }

        let mut indices = indices.to_vec();
        indices.sort_unstable();
        if let Some(w) = indices.windows(2).find(|w| w[0] == w[1]) {
            return Err(Error::DuplicateIndex(w[0]));
        }

        self.check_draw(count)?;

        // Remove from the back so that positions of the remaining cards don't
        // shift.
        let hand = &mut self.hands[player];
        let mut discarded = indices
            .iter()
            .rev()
            .map(|&index| hand.remove(index))
            .collect::<Vec<_>>();
        discarded.reverse();

        self.discard_pile.extend_from_slice(&discarded);
        self.move_from_stock(player, count);

        debug!(
            "Player {player} exchanged {} cards for {count}",
            discarded.len()
        );
        Ok(discarded)
    }

    /// Shuffles the stock, the new stock is a random permutation of all the
    /// cards that are not in other zones.
    pub fn reshuffle_stock<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let excluding = self
            .hands
            .iter()
            .flatten()
            .chain(self.discard_pile.iter())
            .chain(self.revealed.iter())
            .copied()
            .collect::<AHashSet<_>>();
        self.stock = random_permutation(rng, &excluding);
        debug!("Reshuffled stock of {} cards", self.stock.len());
        debug_assert!(self.verify_integrity());
    }

    /// Riffles the stock.
    pub fn riffle_stock<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        riffle(rng, &mut self.stock);
        debug!("Riffled stock of {} cards", self.stock.len());
        debug_assert!(self.verify_integrity());
    }

    /// Moves the discard pile back to the stock and reshuffles the stock,
    /// returns the number of recycled cards.
    pub fn recycle_discards<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let count = self.discard_pile.len();
        self.stock.append(&mut self.discard_pile);
        self.reshuffle_stock(rng);
        count
    }

    fn check_player(&self, player: usize) -> Result<()> {
        if player < self.players() {
            Ok(())
        } else {
            Err(Error::UnknownPlayer(player))
        }
    }

    fn check_draw(&self, count: usize) -> Result<()> {
        let available = self.stock.len();
        if count > available {
            Err(Error::EmptyStock {
                requested: count,
                available,
            })
        } else {
            Ok(())
        }
    }

    /// Removes the card at `index` from a player hand.
    fn take(&mut self, player: usize, index: usize) -> Result<CardId> {
        let hand = self
            .hands
            .get_mut(player)
            .ok_or(Error::UnknownPlayer(player))?;

        if index < hand.len() {
            Ok(hand.remove(index))
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: hand.len(),
            })
        }
    }

    /// Moves `count` cards from the top of the stock to a hand one at a time,
    /// the caller must check the stock has enough cards.
    fn move_from_stock(&mut self, player: usize, count: usize) -> Vec<CardId> {
        let at = self.stock.len() - count;
        let cards = self.stock.drain(at..).rev().collect::<Vec<_>>();
        self.hands[player].extend_from_slice(&cards);
        debug_assert!(self.verify_integrity());
        cards
    }
}
