//! Card game logic: checking suits in hands, comparing suited cards

use super::cards_types::{Hand, Suit, SuitCard};

pub fn hand_has_suit(hand: &Hand, suit: Suit) -> bool {
    hand.iter().any(|c| c.suit() == Some(suit))
}

/// Whether `challenger`, played after `holder`, takes the trick from it.
///
/// Same suit: higher rank wins. Different suit: only trump takes it.
pub fn suit_card_beats(challenger: SuitCard, holder: SuitCard, trump: Option<Suit>) -> bool {
    if challenger.suit == holder.suit {
        return challenger.rank_index() > holder.rank_index();
    }
    Some(challenger.suit) == trump
}
