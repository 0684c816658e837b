use crate::domain::board::{Board, PlayerId};
use crate::domain::cards_logic::suit_card_beats;
use crate::domain::{Card, Hand, Suit};

/// Cards from `hand` the follow-suit rule allows on `board` right now.
pub fn legal_plays(board: &Board, hand: &Hand) -> Vec<Card> {
    hand.iter()
        .copied()
        .filter(|card| board.can_play_suit(card.suit(), hand))
        .collect()
}

/// Winner of a complete trick.
///
/// `plays` is indexed by player id, `play_order` starts with the leader.
///
/// The first Wizard in play order wins outright. Otherwise the leader holds
/// the trick and each later card may take it: anything displaces a Jester,
/// a Jester never displaces anything, and suited cards compare by
/// [`suit_card_beats`]. An all-Jester trick stays with the leader.
pub fn resolve_trick(play_order: &[PlayerId], plays: &[Card], trump: Option<Suit>) -> PlayerId {
    debug_assert_eq!(play_order.len(), plays.len());

    if let Some(&wizard) = play_order.iter().find(|&&p| plays[p].is_wizard()) {
        return wizard;
    }

    let mut winner = play_order[0];
    for &challenger in &play_order[1..] {
        match (plays[winner], plays[challenger]) {
            (Card::Jester(_), Card::Jester(_)) => {}
            (Card::Jester(_), _) => winner = challenger,
            (_, Card::Jester(_)) => {}
            (Card::Suit(held), Card::Suit(played)) => {
                if suit_card_beats(played, held, trump) {
                    winner = challenger;
                }
            }
            (Card::Wizard(_), _) | (_, Card::Wizard(_)) => {
                unreachable!("wizards are resolved before the scan")
            }
        }
    }
    winner
}
