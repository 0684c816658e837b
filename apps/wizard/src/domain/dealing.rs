//! Deck construction and dealing.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::rules::{deck_size, MAX_SPECIAL_CARDS, SUIT_CARDS};
use crate::domain::{Card, Hand, Rank, Suit, SuitCard};

/// One card of each (suit, rank), suit-major.
pub fn all_suit_cards() -> Vec<SuitCard> {
    let mut cards = Vec::with_capacity(SUIT_CARDS);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(SuitCard::new(suit, rank));
        }
    }
    cards
}

/// Full unshuffled deck: suited cards, then wizards, then jesters.
///
/// Counts above [`MAX_SPECIAL_CARDS`] are capped; configurations are
/// validated before they get here.
pub fn full_deck(n_wizard: usize, n_jester: usize) -> Vec<Card> {
    let n_wizard = n_wizard.min(MAX_SPECIAL_CARDS);
    let n_jester = n_jester.min(MAX_SPECIAL_CARDS);
    let mut deck = Vec::with_capacity(deck_size(n_wizard, n_jester));
    deck.extend(all_suit_cards().into_iter().map(Card::Suit));
    deck.extend((0..=u8::MAX).take(n_wizard).map(Card::Wizard));
    deck.extend((0..=u8::MAX).take(n_jester).map(Card::Jester));
    deck
}

pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// Hands plus the trump decided by the remainder pile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub hands: Vec<Hand>,
    pub trump: Option<Suit>,
}

/// Split an already shuffled deck into `n_player` hands of `n_round` cards.
///
/// Player `p` receives `deck[p * n_round..(p + 1) * n_round]`. The first card
/// left over names trump; an empty remainder or a special card means no trump.
/// Callers guarantee `n_player * n_round <= deck.len()`.
pub fn deal(deck: &[Card], n_player: usize, n_round: usize) -> Deal {
    let dealt = n_player * n_round;
    debug_assert!(dealt <= deck.len(), "deal exceeds deck size");

    let hands = (0..n_player)
        .map(|p| {
            let offset = p * n_round;
            deck[offset..offset + n_round].iter().copied().collect::<Hand>()
        })
        .collect();
    let trump = deck.get(dealt).and_then(Card::suit);

    Deal { hands, trump }
}
