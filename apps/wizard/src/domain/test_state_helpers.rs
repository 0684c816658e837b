//! Test-only helpers for building stacked games in domain unit tests.

use crate::domain::board::PlayerId;
use crate::domain::{full_deck, Card, CardRegistry, Game, Hand, Suit};

pub fn registry() -> CardRegistry {
    CardRegistry::from_deck(&full_deck(4, 4)).expect("standard deck registers cleanly")
}

pub fn card(token: &str) -> Card {
    registry()
        .lookup(token)
        .unwrap_or_else(|e| panic!("hardcoded card token {token}: {e}"))
}

pub fn cards(tokens: &[&str]) -> Vec<Card> {
    tokens.iter().map(|t| card(t)).collect()
}

pub fn hand(tokens: &[&str]) -> Hand {
    cards(tokens).into_iter().collect()
}

/// Build a game from explicit hands over the standard 60-card deck.
///
/// `trump` picks the first unused card of that suit as the top of the
/// remainder pile; `None` puts an unused special card there instead.
pub fn stacked_game(hands: &[&[&str]], trump: Option<Suit>, leader: PlayerId) -> Game {
    let n_player = hands.len();
    let n_round = hands[0].len();
    let mut deck: Vec<Card> = hands.iter().flat_map(|h| cards(h)).collect();

    let mut rest: Vec<Card> = full_deck(4, 4)
        .into_iter()
        .filter(|c| !deck.contains(c))
        .collect();
    let top = rest
        .iter()
        .position(|c| match trump {
            Some(suit) => c.suit() == Some(suit),
            None => c.is_special(),
        })
        .expect("a card for the remainder pile");
    deck.push(rest.remove(top));
    deck.extend(rest);

    let game = Game::from_deck(n_player, n_round, &deck, leader).expect("valid stacked deck");
    assert_eq!(game.trump(), trump);
    game
}

/// Predict zero for everyone.
pub fn predict_zeros(game: &mut Game) {
    let zeros = vec![0; game.n_player()];
    game.predict(&zeros).expect("first prediction succeeds");
}

/// Apply a sequence of plays, panicking on the first rejection.
pub fn play_all(game: &mut Game, plays: &[(PlayerId, &str)]) {
    for &(player, token) in plays {
        game.play(player, card(token))
            .unwrap_or_else(|e| panic!("play {token} by {player}: {e}"));
    }
}
