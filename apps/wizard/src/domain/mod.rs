//! Domain layer: pure game logic types and helpers.

pub mod board;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod game;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod tricks;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
pub(crate) mod test_state_helpers;
#[cfg(test)]
mod tests_board;
#[cfg(test)]
mod tests_props_game;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use board::{Board, PlayerId};
pub use cards_logic::{hand_has_suit, suit_card_beats};
pub use cards_parsing::CardRegistry;
pub use cards_types::{Card, Hand, Rank, Suit, SuitCard};
pub use dealing::{all_suit_cards, full_deck};
pub use game::{Game, GameConfig, Phase, PlayOutcome};
pub use seed_derivation::{derive_game_seed, derive_strategy_seed};
pub use tricks::{legal_plays, resolve_trick};
