// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game errors.
use thiserror::Error;

use drawdeck_eval::EvalError;

/// Errors returned by game and zone operations.
///
/// A failing operation never moves a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A game needs at least one player.
    #[error("a game needs at least one player, got {0}")]
    InvalidPlayerCount(usize),
    /// The stock has fewer cards than requested by a deal.
    #[error("cannot deal {requested} cards from a stock of {available}")]
    InsufficientStock {
        /// The number of cards to deal.
        requested: usize,
        /// The number of cards in the stock.
        available: usize,
    },
    /// The stock runs out before a draw completes.
    #[error("cannot draw {requested} cards, the stock has {available}")]
    EmptyStock {
        /// The number of cards to draw.
        requested: usize,
        /// The number of cards in the stock.
        available: usize,
    },
    /// A hand position is past the end of the hand.
    #[error("index {index} out of range for a hand of {len} cards")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The hand size.
        len: usize,
    },
    /// The same hand position was selected twice.
    #[error("hand index {0} selected more than once")]
    DuplicateIndex(usize),
    /// There is no player with this index.
    #[error("unknown player {0}")]
    UnknownPlayer(usize),
    /// A hand cannot be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Result type for game operations.
pub type Result<T> = std::result::Result<T, Error>;
