use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::board::play_order;
use crate::domain::test_state_helpers::{card, hand};
use crate::domain::{Board, Suit};
use crate::errors::domain::ValidationKind;

fn predicted_board(n_player: usize, n_round: usize, leader: usize) -> Board {
    let mut board = Board::with_leader(n_player, n_round, Some(Suit::Heart), leader);
    board.set_predictions(vec![0; n_player]);
    board
}

#[test]
fn play_order_starts_at_leader_and_wraps() {
    assert_eq!(play_order(0, 4), vec![0, 1, 2, 3]);
    assert_eq!(play_order(2, 4), vec![2, 3, 0, 1]);
    assert_eq!(play_order(4, 5), vec![4, 0, 1, 2, 3]);
    assert_eq!(play_order(0, 1), vec![0]);
}

#[test]
fn random_leader_is_in_range_and_seeded() {
    for seed in 0..32 {
        let a = Board::new(5, 3, None, &mut ChaCha8Rng::seed_from_u64(seed)).unwrap();
        let b = Board::new(5, 3, None, &mut ChaCha8Rng::seed_from_u64(seed)).unwrap();
        assert!(a.cur_leader() < 5);
        assert_eq!(a, b);
        assert_eq!(a.round_leaders().len(), 1);
        assert_eq!(a.plays(), &[vec![None; 5]]);
    }
}

#[test]
fn random_leader_needs_a_player() {
    let err = Board::new(0, 3, None, &mut ChaCha8Rng::seed_from_u64(7)).unwrap_err();
    assert_eq!(err.kind(), ValidationKind::InvalidConfig);
}

#[test]
fn fresh_board_derivations() {
    let board = Board::with_leader(4, 2, Some(Suit::Club), 1);
    assert_eq!(board.cur_round(), 0);
    assert_eq!(board.n_finished_round(), 0);
    assert_eq!(board.cur_leader(), 1);
    assert_eq!(board.cur_round_play_order(), vec![1, 2, 3, 0]);
    assert_eq!(board.cur_player(), Some(1));
    assert_eq!(board.cur_leading_suit(), None);
    assert!(!board.is_round_play_finished());
    assert!(board.round_winners().is_empty());
    assert_eq!(board.rounds_won(), vec![0, 0, 0, 0]);
    assert!(!board.is_all_finished());
    assert_eq!(board.trump(), Some(Suit::Club));
    assert_eq!(board.predictions(), None);
}

#[test]
fn cur_player_follows_play_order() {
    let mut board = predicted_board(4, 2, 2);
    board.record_play(2, card("club 5"));
    assert_eq!(board.cur_player(), Some(3));
    board.record_play(3, card("club 6"));
    assert_eq!(board.cur_player(), Some(0));
    board.record_play(0, card("club 7"));
    board.record_play(1, card("club 8"));
    assert_eq!(board.cur_player(), None);
    assert!(board.is_round_play_finished());
}

#[test]
fn leading_suit_skips_specials() {
    let mut board = predicted_board(4, 2, 0);
    board.record_play(0, card("wizard 0"));
    assert_eq!(board.cur_leading_suit(), None);
    board.record_play(1, card("jester 1"));
    assert_eq!(board.cur_leading_suit(), None);
    board.record_play(2, card("diamond 9"));
    assert_eq!(board.cur_leading_suit(), Some(Suit::Diamond));
    board.record_play(3, card("heart 9"));
    assert_eq!(board.cur_leading_suit(), Some(Suit::Diamond));
}

#[test]
fn can_play_suit_follow_rule() {
    let mut board = predicted_board(4, 2, 0);
    board.record_play(0, card("heart 4"));
    let h = hand(&["heart 2", "heart k", "spade 3", "spade q"]);

    assert!(!board.can_play_suit(Some(Suit::Spade), &h));
    assert!(board.can_play_suit(Some(Suit::Heart), &h));
    assert!(board.can_play_suit(None, &h));

    // Void in the led suit
    let void = hand(&["spade 3", "club 2"]);
    assert!(board.can_play_suit(Some(Suit::Spade), &void));
    assert!(board.can_play_suit(Some(Suit::Club), &void));
}

#[test]
fn can_play_anything_without_a_leading_suit() {
    let board = predicted_board(4, 2, 0);
    let h = hand(&["heart 2", "spade 3"]);
    assert!(board.can_play_suit(Some(Suit::Spade), &h));
    assert!(board.can_play_suit(Some(Suit::Heart), &h));
}

#[test]
fn derived_reads_are_idempotent() {
    let mut board = predicted_board(3, 2, 1);
    board.record_play(1, card("jester 0"));
    board.record_play(2, card("club 10"));

    let first = (
        board.cur_player(),
        board.cur_leading_suit(),
        board.cur_round_play_order(),
        board.rounds_won(),
        board.is_round_play_finished(),
        board.is_all_finished(),
    );
    for _ in 0..3 {
        let again = (
            board.cur_player(),
            board.cur_leading_suit(),
            board.cur_round_play_order(),
            board.rounds_won(),
            board.is_round_play_finished(),
            board.is_all_finished(),
        );
        assert_eq!(first, again);
    }
}

#[test]
fn round_winners_exclude_initial_leader() {
    let mut board = predicted_board(3, 3, 2);
    board.next_round(0);
    board.next_round(0);
    assert_eq!(board.round_leaders(), &[2, 0, 0]);
    assert_eq!(board.round_winners(), &[0, 0]);
    assert_eq!(board.rounds_won(), vec![2, 0, 0]);
    assert_eq!(board.cur_round(), 2);
    assert!(!board.is_all_finished());

    board.next_round(1);
    assert_eq!(board.rounds_won(), vec![2, 1, 0]);
    assert!(board.is_all_finished());
    // No one acts in the slot row opened after the last round.
    assert_eq!(board.cur_player(), None);
}

#[test]
fn all_finished_requires_predictions() {
    let mut board = Board::with_leader(2, 1, None, 0);
    board.next_round(1);
    assert!(!board.is_all_finished());
    board.set_predictions(vec![1, 0]);
    assert!(board.is_all_finished());
}

#[test]
fn display_shows_predictions_and_plays() {
    let mut board = Board::with_leader(3, 5, Some(Suit::Spade), 1);
    board.set_predictions(vec![2, 0, 1]);
    board.record_play(1, card("spade 10"));
    let text = board.to_string();
    assert!(text.contains("Trump: Spade"));
    assert!(text.contains("Round: 1/5"));
    assert!(text.contains("Player 0: predicted 2, won 0"));
    assert!(text.contains("Plays: [1: Spade 10] [2: -] [0: -]"));
}

#[test]
fn serializes_plays_and_leaders() {
    let mut board = predicted_board(2, 1, 0);
    board.record_play(0, card("club 2"));
    let json = serde_json::to_value(&board).unwrap();
    assert_eq!(json["trump"], "Heart");
    assert_eq!(json["round_leaders"], serde_json::json!([0]));
    assert_eq!(json["plays"], serde_json::json!([["Club 2", null]]));
    assert_eq!(json["predictions"], serde_json::json!([0, 0]));
}
