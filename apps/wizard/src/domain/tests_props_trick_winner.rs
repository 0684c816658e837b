use proptest::prelude::*;

/// Property-based tests for trick winner resolution
use crate::domain::board::play_order;
use crate::domain::{resolve_trick, test_gens, test_prelude, Card, PlayerId, Suit};

/// Independent formulation: first wizard; else highest trump; else highest
/// card of the first suited card's suit; else (all jesters) the leader.
fn oracle_winner(order: &[PlayerId], plays: &[Card], trump: Option<Suit>) -> PlayerId {
    if let Some(&p) = order.iter().find(|&&p| plays[p].is_wizard()) {
        return p;
    }
    let suited: Vec<(PlayerId, Suit, usize)> = order
        .iter()
        .filter_map(|&p| match plays[p] {
            Card::Suit(c) => Some((p, c.suit, c.rank_index())),
            _ => None,
        })
        .collect();
    let Some(&(_, lead, _)) = suited.first() else {
        return order[0];
    };
    let best_of = |suit: Suit| {
        suited
            .iter()
            .filter(|(_, s, _)| *s == suit)
            .max_by_key(|(_, _, rank)| *rank)
            .map(|(p, _, _)| *p)
    };
    trump
        .and_then(best_of)
        .or_else(|| best_of(lead))
        .unwrap_or(order[0])
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: the scan-based resolver agrees with the oracle for any trick.
    #[test]
    fn prop_trick_winner_matches_oracle(
        (leader, plays) in test_gens::complete_trick(),
        trump in test_gens::trump(),
    ) {
        let order = play_order(leader, plays.len());
        let winner = resolve_trick(&order, &plays, trump);
        let expected = oracle_winner(&order, &plays, trump);
        prop_assert_eq!(winner, expected,
            "leader={} plays={:?} trump={:?}", leader, plays, trump);
    }

    /// Property: a jester only wins a trick made entirely of jesters, and then
    /// it is the leader's.
    #[test]
    fn prop_jester_wins_only_all_jester_tricks(
        (leader, plays) in test_gens::complete_trick(),
        trump in test_gens::trump(),
    ) {
        let order = play_order(leader, plays.len());
        let winner = resolve_trick(&order, &plays, trump);
        prop_assert!(winner < plays.len());
        if plays[winner].is_jester() {
            prop_assert!(plays.iter().all(Card::is_jester));
            prop_assert_eq!(winner, leader);
        }
    }

    /// Property: with suited cards only, the winner holds trump if anyone
    /// played trump, otherwise the led suit.
    #[test]
    fn prop_suited_winner_suit(
        (leader, plays) in test_gens::suited_trick(),
        trump in test_gens::suit(),
    ) {
        let order = play_order(leader, plays.len());
        let winner = resolve_trick(&order, &plays, Some(trump));
        let any_trump = plays.iter().any(|c| c.suit() == Some(trump));
        let expected_suit = if any_trump { Some(trump) } else { plays[leader].suit() };
        prop_assert_eq!(plays[winner].suit(), expected_suit);
    }
}
