// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw poker session runner.
use anyhow::{Result, bail};
use log::{info, warn};
use rand::{SeedableRng, rngs::StdRng};
use std::sync::Arc;

use drawdeck_core::{Catalog, Error, GameState, HandRank, HandValue};

/// Session configuration.
#[derive(Debug)]
pub struct Config {
    /// Number of players.
    pub players: usize,
    /// Number of exchange rounds.
    pub rounds: usize,
    /// Seed for the game randomness.
    pub seed: Option<u64>,
}

/// A draw poker strategy.
pub trait Strategy {
    /// Returns the positions of the cards the active player wants to change.
    fn discards(&mut self, game: &GameState) -> Result<Vec<usize>>;
}

/// Keeps made hands and changes the lowest unpaired cards.
#[derive(Debug, Default)]
pub struct KeepGroups;

impl KeepGroups {
    /// Most cards a player can change in a turn.
    const MAX_DISCARDS: usize = 3;
}

impl Strategy for KeepGroups {
    fn discards(&mut self, game: &GameState) -> Result<Vec<usize>> {
        let player = game.active_player();
        if game.evaluate(player)?.rank() >= HandRank::Straight {
            return Ok(Vec::default());
        }

        let catalog = game.catalog();
        let ranks = game
            .hand(player)?
            .iter()
            .map(|&id| catalog.card(id).rank().high_value())
            .collect::<Vec<_>>();

        let mut singles = ranks
            .iter()
            .enumerate()
            .filter(|(_, r)| ranks.iter().filter(|other| other == r).count() == 1)
            .map(|(idx, &r)| (r, idx))
            .collect::<Vec<_>>();
        singles.sort_unstable();

        Ok(singles
            .into_iter()
            .take(Self::MAX_DISCARDS)
            .map(|(_, idx)| idx)
            .collect())
    }
}

/// The session result.
#[derive(Debug)]
pub struct Showdown {
    /// Each player hand value.
    pub values: Vec<HandValue>,
    /// The players with the best hand.
    pub winners: Vec<usize>,
}

/// Runs a draw poker session.
pub fn run(config: &Config) -> Result<Showdown> {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let catalog = Arc::new(Catalog::new());
    let mut game = GameState::with_rng(config.players, catalog, rng)?;

    game.riffle_stock();
    game.deal_round(HandValue::SIZE)?;

    for player in 0..game.players() {
        info!("Player {player} dealt {}", game.describe_hand(player)?);
    }

    let mut strategy = KeepGroups;
    for round in 1..=config.rounds {
        info!("Exchange round {round}");
        for _ in 0..game.players() {
            play_turn(&mut game, &mut strategy)?;
        }
    }

    let values = (0..game.players())
        .map(|player| game.evaluate(player))
        .collect::<Result<Vec<_>, _>>()?;

    for (player, value) in values.iter().enumerate() {
        info!(
            "Player {player} shows {} {value}",
            game.describe_hand(player)?
        );
    }

    let winners = match values.iter().max() {
        Some(best) => values
            .iter()
            .enumerate()
            .filter(|(_, v)| *v == best)
            .map(|(player, _)| player)
            .collect::<Vec<_>>(),
        None => Vec::default(),
    };

    for player in &winners {
        info!("Player {player} wins with {}", values[*player]);
    }

    if !game.verify_integrity() {
        bail!("Cards integrity check failed");
    }

    Ok(Showdown { values, winners })
}

/// Plays the active player exchange, a player stands if there are not enough
/// cards left to draw.
fn play_turn<S: Strategy>(game: &mut GameState, strategy: &mut S) -> Result<()> {
    let player = game.active_player();
    let indices = strategy.discards(game)?;

    if indices.len() > game.stock().len() && !game.discard_pile().is_empty() {
        game.recycle_discards();
    }

    match game.exchange(indices.len(), &indices) {
        Ok(discarded) => {
            let labels = discarded
                .iter()
                .map(|&id| game.catalog().describe(id))
                .collect::<Vec<_>>();
            info!(
                "Player {player} changed [{}] now has {}",
                labels.join(" "),
                game.describe_hand(player)?
            );
        }
        Err(Error::EmptyStock { available, .. }) => {
            warn!("Player {player} stands, {available} cards left");
            game.advance_turn();
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
