//! Test helpers for card parsing and fixtures

use wizard::domain::full_deck;
use wizard::{Card, CardRegistry, Hand};

/// Registry over the standard 60-card deck.
pub fn standard_registry() -> CardRegistry {
    CardRegistry::from_deck(&full_deck(4, 4)).expect("standard deck registers cleanly")
}

/// Parse a hardcoded card name; panics on a typo in the test itself.
pub fn card(token: &str) -> Card {
    standard_registry()
        .lookup(token)
        .unwrap_or_else(|e| panic!("hardcoded card token {token}: {e}"))
}

pub fn cards(tokens: &[&str]) -> Vec<Card> {
    let registry = standard_registry();
    tokens
        .iter()
        .map(|t| {
            registry
                .lookup(t)
                .unwrap_or_else(|e| panic!("hardcoded card token {t}: {e}"))
        })
        .collect()
}

pub fn hand(tokens: &[&str]) -> Hand {
    cards(tokens).into_iter().collect()
}
