// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game session state.
use ahash::AHashSet;
use log::{debug, info, warn};
use rand::{SeedableRng, rngs::StdRng};
use std::sync::Arc;

use drawdeck_cards::{CardId, Catalog, random_permutation};
use drawdeck_eval::HandValue;

use crate::{
    error::{Error, Result},
    zones::{Zone, Zones},
};

/// The state of a game session.
///
/// A game owns its zones and its random source, the catalog is shared with
/// other games. All mutating methods take `&mut self` so a host that shares a
/// game between tasks must wrap it in a lock.
#[derive(Debug)]
pub struct GameState {
    catalog: Arc<Catalog>,
    zones: Zones,
    active_player: usize,
    rng: StdRng,
}

impl GameState {
    /// Creates a new game with a shuffled stock.
    ///
    /// Fails with [Error::InvalidPlayerCount] if `players` is zero.
    pub fn new(players: usize, catalog: Arc<Catalog>) -> Result<Self> {
        Self::with_rng(players, catalog, StdRng::from_os_rng())
    }

    /// Creates a new game with user initialized randomness.
    pub fn with_rng(players: usize, catalog: Arc<Catalog>, mut rng: StdRng) -> Result<Self> {
        if players < 1 {
            return Err(Error::InvalidPlayerCount(players));
        }

        let stock = random_permutation(&mut rng, &AHashSet::default());
        info!("New game with {players} players");

        Ok(Self {
            catalog,
            zones: Zones::new(players, stock),
            active_player: 0,
            rng,
        })
    }

    /// The number of players.
    pub fn players(&self) -> usize {
        self.zones.players()
    }

    /// The index of the player whose turn it is.
    pub fn active_player(&self) -> usize {
        self.active_player
    }

    /// The cards catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The cards zones.
    pub fn zones(&self) -> &Zones {
        &self.zones
    }

    /// The stock cards, the last card is the top.
    pub fn stock(&self) -> &[CardId] {
        self.zones.stock()
    }

    /// A player hand.
    pub fn hand(&self, player: usize) -> Result<&[CardId]> {
        self.zones.hand(player)
    }

    /// The discard pile.
    pub fn discard_pile(&self) -> &[CardId] {
        self.zones.discard_pile()
    }

    /// The revealed cards.
    pub fn revealed(&self) -> &[CardId] {
        self.zones.revealed()
    }

    /// Returns the zone that holds a card.
    pub fn locate(&self, id: CardId) -> Option<Zone> {
        self.zones.locate(id)
    }

    /// Checks that every catalog card is in exactly one zone.
    pub fn verify_integrity(&self) -> bool {
        self.zones.verify_integrity()
    }

    /// Deals `count` cards from the stock to a player hand.
    pub fn deal(&mut self, player: usize, count: usize) -> Result<Vec<CardId>> {
        self.zones.deal(player, count)
    }

    /// Deals `count` cards to each player.
    pub fn deal_round(&mut self, count: usize) -> Result<()> {
        self.zones.deal_round(count)
    }

    /// Draws `count` cards from the stock to a player hand, all or nothing.
    pub fn draw(&mut self, player: usize, count: usize) -> Result<usize> {
        self.zones.draw(player, count)
    }

    /// Moves the card at `index` in a player hand to the discard pile.
    pub fn discard(&mut self, player: usize, index: usize) -> Result<CardId> {
        self.zones.discard(player, index)
    }

    /// Moves the card at `index` in a player hand to the revealed cards.
    pub fn reveal(&mut self, player: usize, index: usize) -> Result<CardId> {
        self.zones.reveal(player, index)
    }

    /// Plays a draw poker exchange for the active player.
    ///
    /// Discards the cards at `indices` from the active player hand, draws
    /// `count` replacements and passes the turn to the next player. If any
    /// index is invalid or the stock has fewer than `count` cards the call fails
    /// without moving cards and the turn does not pass.
    pub fn exchange(&mut self, count: usize, indices: &[usize]) -> Result<Vec<CardId>> {
        let player = self.active_player;
        let discarded = self.zones.exchange(player, count, indices)?;

        info!("Player {player} exchanged {} cards", discarded.len());

        self.advance_turn();
        Ok(discarded)
    }

    /// Passes the turn to the next player.
    pub fn advance_turn(&mut self) {
        self.active_player = (self.active_player + 1) % self.players();
        debug!("Player {} is active", self.active_player);
    }

    /// Shuffles the cards in the stock.
    pub fn reshuffle_stock(&mut self) {
        self.zones.reshuffle_stock(&mut self.rng);
    }

    /// Riffles the cards in the stock.
    pub fn riffle_stock(&mut self) {
        self.zones.riffle_stock(&mut self.rng);
    }

    /// Moves the discard pile to the stock and shuffles it.
    pub fn recycle_discards(&mut self) -> usize {
        let count = self.zones.recycle_discards(&mut self.rng);
        warn!("Recycled {count} discarded cards into the stock");
        count
    }

    /// Evaluates a player hand.
    pub fn evaluate(&self, player: usize) -> Result<HandValue> {
        let hand = self.zones.hand(player)?;
        Ok(HandValue::eval(&self.catalog, hand)?)
    }

    /// Returns the labels of a player cards, for example "AS 10H 3C".
    pub fn describe_hand(&self, player: usize) -> Result<String> {
        let hand = self.zones.hand(player)?;
        let labels = hand
            .iter()
            .map(|&id| self.catalog.describe(id))
            .collect::<Vec<_>>();
        Ok(labels.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawdeck_eval::{EvalError, HandRank};
    use std::thread;

    // Creates a game with seeded randomness.
    fn new_game(players: usize) -> GameState {
        let rng = StdRng::seed_from_u64(13);
        GameState::with_rng(players, Arc::new(Catalog::new()), rng).unwrap()
    }

    #[test]
    fn new_game_setup() {
        let game = new_game(4);
        assert_eq!(game.players(), 4);
        assert_eq!(game.active_player(), 0);
        assert_eq!(game.stock().len(), Catalog::SIZE);
        assert!(game.discard_pile().is_empty());
        assert!(game.revealed().is_empty());
        assert!(game.verify_integrity());

        // The stock is shuffled.
        assert!(!game.stock().iter().copied().eq(CardId::all()));

        let res = GameState::new(0, Arc::new(Catalog::new()));
        assert!(matches!(res, Err(Error::InvalidPlayerCount(0))));
    }

    #[test]
    fn deal_and_discard_round_trip() {
        for n in [0, 1, 5, 26, 52] {
            let mut game = new_game(1);
            let dealt = game.deal(0, n).unwrap();
            assert_eq!(dealt.len(), n);
            assert!(game.verify_integrity());

            for _ in 0..n {
                game.discard(0, 0).unwrap();
                assert!(game.verify_integrity());
            }

            assert_eq!(game.stock().len(), Catalog::SIZE - n);
            assert_eq!(game.discard_pile().len(), n);
            assert_eq!(game.discard_pile(), dealt.as_slice());
            assert!(game.hand(0).unwrap().is_empty());
        }
    }

    #[test]
    fn deal_too_many() {
        let mut game = new_game(2);
        let stock = game.stock().to_vec();

        assert_eq!(
            game.deal(0, 53),
            Err(Error::InsufficientStock {
                requested: 53,
                available: 52
            })
        );
        assert_eq!(game.stock(), stock.as_slice());
        assert!(game.verify_integrity());
    }

    #[test]
    fn discard_first_card() {
        let mut game = new_game(2);
        game.deal_round(5).unwrap();

        let hand = game.hand(1).unwrap().to_vec();
        let id = game.discard(1, 0).unwrap();

        assert_eq!(id, hand[0]);
        assert_eq!(game.hand(1).unwrap(), &hand[1..]);
        assert_eq!(game.discard_pile(), &[id]);
        assert_eq!(game.locate(id), Some(Zone::DiscardPile));
        assert!(game.verify_integrity());
    }

    #[test]
    fn exchange_advances_turn() {
        let players = 3;
        let mut game = new_game(players);
        game.deal_round(5).unwrap();

        for turn in 0..7 {
            let player = game.active_player();
            assert_eq!(player, turn % players);

            let hand = game.hand(player).unwrap().to_vec();
            let discard_len = game.discard_pile().len();

            let discarded = game.exchange(2, &[4, 0]).unwrap();
            assert_eq!(discarded, vec![hand[0], hand[4]]);
            assert_eq!(&game.discard_pile()[discard_len..], discarded.as_slice());
            assert_eq!(game.hand(player).unwrap().len(), 5);
            assert_eq!(&game.hand(player).unwrap()[..3], &hand[1..4]);
            assert_eq!(game.active_player(), (player + 1) % players);
            assert!(game.verify_integrity());
        }
    }

    #[test]
    fn failed_exchange_keeps_turn() {
        let mut game = new_game(2);
        game.deal_round(5).unwrap();

        let res = game.exchange(1, &[5]);
        assert_eq!(res, Err(Error::IndexOutOfRange { index: 5, len: 5 }));
        assert_eq!(game.active_player(), 0);

        // Empty the stock.
        let left = game.stock().len();
        game.draw(1, left).unwrap();

        let hand = game.hand(0).unwrap().to_vec();
        let res = game.exchange(1, &[0]);
        assert_eq!(
            res,
            Err(Error::EmptyStock {
                requested: 1,
                available: 0
            })
        );
        assert_eq!(game.hand(0).unwrap(), hand.as_slice());
        assert_eq!(game.active_player(), 0);
        assert!(game.verify_integrity());

        // Recycling the discards lets the exchange go through.
        game.discard(1, 0).unwrap();
        assert_eq!(game.recycle_discards(), 1);
        assert_eq!(game.exchange(1, &[0]).unwrap(), vec![hand[0]]);
        assert_eq!(game.active_player(), 1);
        assert!(game.verify_integrity());
    }

    #[test]
    fn single_player_keeps_turn() {
        let mut game = new_game(1);
        game.deal(0, 5).unwrap();
        game.exchange(0, &[]).unwrap();
        assert_eq!(game.active_player(), 0);
        game.advance_turn();
        assert_eq!(game.active_player(), 0);
    }

    #[test]
    fn evaluate_hands() {
        let mut game = new_game(2);
        assert_eq!(
            game.evaluate(0),
            Err(Error::Eval(EvalError::InvalidHandSize(0)))
        );
        assert_eq!(game.evaluate(2), Err(Error::UnknownPlayer(2)));

        game.deal_round(5).unwrap();
        let hv = game.evaluate(1).unwrap();
        let expected = HandValue::eval(game.catalog(), game.hand(1).unwrap()).unwrap();
        assert_eq!(hv, expected);
        assert!(hv.rank() >= HandRank::HighCard);

        let labels = game.describe_hand(1).unwrap();
        assert_eq!(labels.split(' ').count(), 5);
    }

    #[test]
    fn shuffles_keep_integrity() {
        let mut game = new_game(3);
        game.deal_round(4).unwrap();
        game.reveal(2, 3).unwrap();
        game.discard(0, 1).unwrap();

        game.riffle_stock();
        assert!(game.verify_integrity());
        game.reshuffle_stock();
        assert!(game.verify_integrity());
        assert_eq!(game.stock().len(), Catalog::SIZE - 12);
        assert_eq!(game.revealed().len(), 1);
    }

    #[test]
    fn games_share_catalog() {
        let catalog = Arc::new(Catalog::new());

        let handles = (0..4)
            .map(|seed| {
                let catalog = catalog.clone();
                thread::spawn(move || {
                    let rng = StdRng::seed_from_u64(seed);
                    let mut game = GameState::with_rng(2, catalog, rng).unwrap();
                    game.deal_round(5).unwrap();
                    for _ in 0..4 {
                        game.exchange(3, &[0, 1, 2]).unwrap();
                    }
                    game.verify_integrity()
                })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
