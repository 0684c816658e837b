use crate::domain::board::play_order;
use crate::domain::test_state_helpers::{card, cards, hand};
use crate::domain::{legal_plays, resolve_trick, Board, Card, PlayerId, Suit};

/// Resolve a trick given cards in play order starting from `leader`.
fn winner_of(leader: PlayerId, in_order: &[&str], trump: Option<Suit>) -> PlayerId {
    let n = in_order.len();
    let order = play_order(leader, n);
    let mut by_player = vec![Card::Jester(0); n];
    for (&p, token) in order.iter().zip(in_order) {
        by_player[p] = card(token);
    }
    resolve_trick(&order, &by_player, trump)
}

#[test]
fn trump_beats_led_suit() {
    // Leader 0 plays Spade 5, player 1 trumps with Heart K.
    let w = winner_of(0, &["spade 5", "heart k", "spade 2", "club a"], Some(Suit::Heart));
    assert_eq!(w, 1);
}

#[test]
fn higher_rank_of_same_suit_wins() {
    let w = winner_of(0, &["spade 5", "spade k", "spade 2", "club a"], Some(Suit::Heart));
    assert_eq!(w, 1);
}

#[test]
fn off_suit_never_wins() {
    let w = winner_of(2, &["diamond 3", "club a", "spade a", "heart a"], Some(Suit::Club));
    // Play order 2,3,0,1: club A (player 3) trumps.
    assert_eq!(w, 3);

    let w = winner_of(2, &["diamond 3", "club a", "spade a", "heart a"], None);
    assert_eq!(w, 2);
}

#[test]
fn wizard_wins_regardless_of_later_plays() {
    let w = winner_of(
        0,
        &["spade 5", "heart k", "wizard 0", "heart a", "wizard 1"],
        Some(Suit::Heart),
    );
    assert_eq!(w, 2);
}

#[test]
fn first_wizard_in_play_order_wins() {
    // Leader 3: order 3,0,1,2. Wizard 2 is played by player 0 first.
    let w = winner_of(3, &["club 2", "wizard 2", "wizard 0", "club 3"], None);
    assert_eq!(w, 0);
}

#[test]
fn jester_lead_yields_to_next_card() {
    let w = winner_of(0, &["jester 0", "club 4", "club 3", "diamond a"], Some(Suit::Spade));
    assert_eq!(w, 1);
}

#[test]
fn jester_yields_even_to_off_suit() {
    // After a jester lead, the first suited card takes the lead position.
    let w = winner_of(1, &["jester 0", "jester 1", "diamond 2", "club a"], None);
    assert_eq!(w, 3);
}

#[test]
fn jester_never_takes_a_trick_from_a_suited_card() {
    let w = winner_of(0, &["heart 2", "jester 0", "jester 1", "jester 2"], None);
    assert_eq!(w, 0);
}

#[test]
fn all_jesters_go_to_the_leader() {
    let w = winner_of(2, &["jester 0", "jester 1", "jester 2", "jester 3"], None);
    assert_eq!(w, 2);
}

#[test]
fn legal_plays_follow_lead() {
    let mut board = Board::with_leader(3, 3, Some(Suit::Club), 0);
    board.set_predictions(vec![0, 0, 0]);
    board.record_play(0, card("heart 9"));

    let h = hand(&["heart 2", "spade k", "wizard 0", "jester 3"]);
    let mut legal = legal_plays(&board, &h);
    legal.sort();
    let mut expected = cards(&["heart 2", "wizard 0", "jester 3"]);
    expected.sort();
    assert_eq!(legal, expected);

    // Void in hearts: anything goes
    let h = hand(&["spade k", "club 2"]);
    assert_eq!(legal_plays(&board, &h).len(), 2);
}

#[test]
fn legal_plays_unrestricted_after_special_lead() {
    let mut board = Board::with_leader(3, 3, None, 0);
    board.set_predictions(vec![0, 0, 0]);
    board.record_play(0, card("wizard 1"));

    let h = hand(&["heart 2", "spade k"]);
    assert_eq!(legal_plays(&board, &h).len(), 2);
}
