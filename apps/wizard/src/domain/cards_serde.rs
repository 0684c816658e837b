//! Serialization for card types.
//!
//! Suits and cards serialize to their canonical display names ("Spade",
//! "Spade K", "Wizard 0")
//! so match records stay readable. Reading cards back goes through
//! [`CardRegistry`](super::cards_parsing::CardRegistry), not serde.

use serde::{Serialize, Serializer};

use super::cards_types::{Card, Suit};

impl Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
