//! Card lookup from user-typed tokens (e.g. "Spade K", "hq", "wizard 2").
//!
//! The registry is built once from a concrete deck and handed to whichever
//! adapter needs to turn text into cards. Nothing here is global.

use std::collections::HashMap;
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit, SuitCard};
use crate::errors::domain::{DomainError, ValidationKind};

impl Rank {
    /// Parse "2".."10", "J", "Q", "K", "A" (case-insensitive).
    pub fn from_token(token: &str) -> Result<Rank, DomainError> {
        let wanted = token.trim();
        Rank::ALL
            .into_iter()
            .find(|rank| rank.token().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                DomainError::validation(ValidationKind::InvalidRank, format!("Invalid rank: {token}"))
            })
    }
}

impl FromStr for Rank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::from_token(s)
    }
}

impl SuitCard {
    /// Build a suited card from a rank token; fails with `InvalidRank`.
    pub fn parse(suit: Suit, rank: &str) -> Result<SuitCard, DomainError> {
        Ok(SuitCard::new(suit, Rank::from_token(rank)?))
    }
}

/// Trim, lower-case and collapse internal whitespace.
fn normalize(token: &str) -> String {
    token
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn suit_prefixes(suit: Suit) -> [String; 3] {
    let name = suit.name().to_lowercase();
    let initial = name[..1].to_string();
    let plural = format!("{name}s");
    [name, plural, initial]
}

/// Lookup table from normalized aliases to cards.
#[derive(Debug, Clone, Default)]
pub struct CardRegistry {
    by_alias: HashMap<String, Card>,
}

impl CardRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every alias of every card in `deck`.
    ///
    /// Fails with `DuplicateCardName` if two cards claim the same alias, which
    /// also catches a deck holding the same card twice.
    pub fn from_deck(deck: &[Card]) -> Result<Self, DomainError> {
        let mut registry = Self::new();
        for card in deck {
            for alias in Self::aliases(card) {
                registry.register(&alias, *card)?;
            }
        }
        Ok(registry)
    }

    /// All spellings that resolve to `card`, already normalized.
    pub fn aliases(card: &Card) -> Vec<String> {
        match card {
            Card::Suit(suit_card) => {
                let rank = suit_card.rank.token().to_lowercase();
                suit_prefixes(suit_card.suit)
                    .iter()
                    .flat_map(|prefix| [format!("{prefix} {rank}"), format!("{prefix}{rank}")])
                    .collect()
            }
            Card::Wizard(idx) => vec![format!("wizard {idx}"), format!("wizard{idx}")],
            Card::Jester(idx) => vec![format!("jester {idx}"), format!("jester{idx}")],
        }
    }

    pub fn register(&mut self, alias: &str, card: Card) -> Result<(), DomainError> {
        let key = normalize(alias);
        if let Some(existing) = self.by_alias.get(&key) {
            return Err(DomainError::validation(
                ValidationKind::DuplicateCardName,
                format!("Alias '{key}' already registered for {existing}"),
            ));
        }
        self.by_alias.insert(key, card);
        Ok(())
    }

    /// Resolve a user-typed token to its card; fails with `InvalidCardName`.
    pub fn lookup(&self, token: &str) -> Result<Card, DomainError> {
        self.by_alias.get(&normalize(token)).copied().ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidCardName,
                format!("Unknown card name: {token}"),
            )
        })
    }

    /// Number of registered aliases.
    pub fn len(&self) -> usize {
        self.by_alias.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_alias.is_empty()
    }
}

/// Non-panicking helper to look up several tokens at once.
pub fn try_lookup_cards<I, S>(registry: &CardRegistry, tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| registry.lookup(s.as_ref()))
        .collect()
}
