use proptest::prelude::*;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Property-based tests driving whole matches through the public Game API
use crate::domain::{legal_plays, test_gens, test_prelude, Card, Game, Phase};
use crate::errors::domain::ValidationKind;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: a match driven by random legal plays keeps hands, turn order
    /// and tallies consistent, and always ends in zero-sum scores.
    #[test]
    fn prop_random_legal_match_is_consistent((config, seed) in test_gens::game_setup()) {
        let mut game = Game::from_seed(&config, seed).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0x5eed);
        let n_player = game.n_player();
        let n_round = game.n_round();

        let predictions: Vec<i32> = (0..n_player).map(|p| (p % 3) as i32).collect();
        game.predict(&predictions).unwrap();

        let mut plays_made = 0usize;
        while game.phase() != Phase::Finished {
            let board = game.board();
            let round = board.cur_round();
            let player = board.cur_player().unwrap();
            if board.cur_round_plays().iter().all(Option::is_none) {
                prop_assert_eq!(player, board.round_leaders()[round]);
            }

            let hand = game.remained_hand(player).unwrap().clone();
            let legal = legal_plays(board, &hand);
            prop_assert!(!legal.is_empty());
            for c in hand.iter().filter(|c| !legal.contains(*c)) {
                let err = game.clone().play(player, *c).unwrap_err();
                prop_assert_eq!(err.kind(), ValidationKind::IllegalSuit);
            }

            let card: Card = *legal.choose(&mut rng).unwrap();
            let before = hand.len();
            let outcome = game.play(player, card).unwrap();
            plays_made += 1;

            prop_assert_eq!(game.remained_hand(player).unwrap().len(), before - 1);
            prop_assert!(game.remained_hands()[player].is_subset(&game.hands()[player]));
            prop_assert_eq!(outcome.round_completed, plays_made % n_player == 0);
        }

        prop_assert_eq!(plays_made, n_player * n_round);
        prop_assert!(game.remained_hands().iter().all(|h| h.is_empty()));
        prop_assert_eq!(game.board().rounds_won().iter().sum::<usize>(), n_round);
        prop_assert_eq!(game.board().round_winners().len(), n_round);

        let scores = game.score().unwrap();
        prop_assert_eq!(scores.len(), n_player);
        prop_assert_eq!(scores.iter().sum::<i64>(), 0);
    }

    /// Property: the same config and seed always deal the same match.
    #[test]
    fn prop_seeded_deal_is_deterministic((config, seed) in test_gens::game_setup()) {
        let a = Game::from_seed(&config, seed).unwrap();
        let b = Game::from_seed(&config, seed).unwrap();
        prop_assert_eq!(a.hands(), b.hands());
        prop_assert_eq!(a.trump(), b.trump());
        prop_assert_eq!(a.board().cur_leader(), b.board().cur_leader());

        let dealt: usize = a.hands().iter().map(|h| h.len()).sum();
        prop_assert_eq!(dealt, a.n_player() * a.n_round());
    }
}
