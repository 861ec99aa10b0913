// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card identifiers and the cards catalog.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors returned when resolving raw card identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The identifier is not in the catalog.
    #[error("unknown card id {0}")]
    UnknownCardId(u8),
}

/// A stable card identifier.
///
/// Identifiers are in the range `0..52` and are assigned suit by suit, from
/// ace to king, with suits in the order spades, hearts, clubs, diamonds:
///
/// ```text
///   id = suit_index * 13 + (value - 1)
/// ```
///
/// so the ace of spades is 0, the king of spades 12 and the king of diamonds 51.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CardId(u8);

impl CardId {
    /// Creates the id of the card with the given rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self(suit as u8 * 13 + rank.value() - 1)
    }

    /// The identifier as an integer.
    pub fn index(&self) -> u8 {
        self.0
    }

    /// Returns the rank encoded in this id.
    pub fn rank(&self) -> Rank {
        RANKS[(self.0 % 13) as usize]
    }

    /// Returns the suit encoded in this id.
    pub fn suit(&self) -> Suit {
        SUITS[(self.0 / 13) as usize]
    }

    /// Returns all the ids in catalog order.
    pub fn all() -> impl DoubleEndedIterator<Item = CardId> {
        (0..Catalog::SIZE as u8).map(CardId)
    }
}

impl TryFrom<u8> for CardId {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (value as usize) < Catalog::SIZE {
            Ok(CardId(value))
        } else {
            Err(CardError::UnknownCardId(value))
        }
    }
}

impl From<CardId> for u8 {
    fn from(id: CardId) -> Self {
        id.0
    }
}

impl From<CardId> for usize {
    fn from(id: CardId) -> Self {
        id.0 as usize
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

const RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Deuce,
    Rank::Trey,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

const SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

/// Card rank, the discriminant is the card numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace
    Ace = 1,
    /// Deuce
    Deuce,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
}

impl Rank {
    /// Returns all ranks from ace to king.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        RANKS.into_iter()
    }

    /// The numeric value, ace is 1 and king is 13.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// The value used when the ace plays high, ace is 14.
    pub fn high_value(&self) -> u8 {
        match self {
            Rank::Ace => 14,
            r => r.value(),
        }
    }

    /// Checks if this is a jack, queen or king.
    pub fn is_face(&self) -> bool {
        self.value() > 10
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Ace => "A",
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        };

        write!(f, "{rank}")
    }
}

/// Card suit, the discriminant is the suit index used by [CardId].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades suit.
    Spades = 0,
    /// Hearts suit.
    Hearts,
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits in catalog order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        SUITS.into_iter()
    }
}

/// A card catalog entry.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Card {
    id: CardId,
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card {
            id: CardId::new(rank, suit),
            rank,
            suit,
        }
    }

    /// This card unique id.
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card numeric value, ace is 1.
    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Checks if this is a face card.
    pub fn is_face(&self) -> bool {
        self.rank.is_face()
    }

    /// A one line dump of all the card attributes.
    pub fn diagnostic(&self) -> String {
        format!(
            "{} {} {} id:{}",
            self,
            self.is_face(),
            self.value(),
            self.id
        )
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// The immutable catalog of the 52 cards indexed by [CardId].
///
/// A catalog is built once and then shared, for example with an `Arc`, by all
/// the games that need to resolve card ids.
#[derive(Debug, Clone)]
pub struct Catalog {
    cards: Vec<Card>,
}

impl Catalog {
    /// The number of cards in the catalog.
    pub const SIZE: usize = 52;

    /// Builds the catalog.
    pub fn new() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }

    /// Returns the card with the given id.
    pub fn card(&self, id: CardId) -> &Card {
        &self.cards[usize::from(id)]
    }

    /// Returns the card for a raw identifier.
    pub fn get(&self, id: u8) -> Result<&Card, CardError> {
        CardId::try_from(id).map(|id| self.card(id))
    }

    /// A rank and suit label for a card, for example "AS" or "10H".
    pub fn describe(&self, id: CardId) -> String {
        self.card(id).to_string()
    }

    /// Iterates the cards in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
