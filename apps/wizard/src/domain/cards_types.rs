//! Core card-related types: Suit, Rank, SuitCard, Card, Hand

use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Spade,
    Heart,
    Diamond,
    Club,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Spade => "Spade",
            Suit::Heart => "Heart",
            Suit::Diamond => "Diamond",
            Suit::Club => "Club",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ranks from lowest to highest. The declaration order is the comparison order
/// within a suit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
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
        Rank::Ace,
    ];

    /// Position in [`Rank::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn token(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
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
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A ranked card of one suit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SuitCard {
    pub suit: Suit,
    pub rank: Rank,
}

impl SuitCard {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub const fn rank_index(&self) -> usize {
        self.rank.index()
    }
}

/// A playable card.
///
/// Wizards and Jesters carry a copy index so that several copies can live in
/// the same [`Hand`].
///
/// Ord is only for stable presentation (suited cards by suit then rank, then
/// wizards, then jesters). Trick resolution never uses it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Card {
    Suit(SuitCard),
    Wizard(u8),
    Jester(u8),
}

impl Card {
    pub const fn suited(suit: Suit, rank: Rank) -> Self {
        Card::Suit(SuitCard::new(suit, rank))
    }

    /// `None` for Wizards and Jesters.
    pub const fn suit(&self) -> Option<Suit> {
        match self {
            Card::Suit(card) => Some(card.suit),
            Card::Wizard(_) | Card::Jester(_) => None,
        }
    }

    pub const fn is_wizard(&self) -> bool {
        matches!(self, Card::Wizard(_))
    }

    pub const fn is_jester(&self) -> bool {
        matches!(self, Card::Jester(_))
    }

    pub const fn is_special(&self) -> bool {
        self.suit().is_none()
    }
}

impl From<SuitCard> for Card {
    fn from(card: SuitCard) -> Self {
        Card::Suit(card)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Suit(card) => write!(f, "{} {}", card.suit, card.rank),
            Card::Wizard(idx) => write!(f, "Wizard {idx}"),
            Card::Jester(idx) => write!(f, "Jester {idx}"),
        }
    }
}

/// A set of unique cards held by one player.
pub type Hand = BTreeSet<Card>;
