//! Public game record: everything a player may see.
//!
//! Only round leaders and per-slot plays are stored; current round, leader,
//! player and leading suit are all derived on demand.

use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::domain::{hand_has_suit, Card, Hand, Suit};
use crate::errors::domain::{ensure, DomainError, ValidationKind};

pub type PlayerId = usize;

/// Returns the seat `n` steps clockwise from `start`.
#[inline]
pub fn nth_from(start: PlayerId, n: usize, n_player: usize) -> PlayerId {
    (start + n) % n_player
}

/// Leader first, then clockwise through every seat once.
pub fn play_order(leader: PlayerId, n_player: usize) -> Vec<PlayerId> {
    (0..n_player).map(|i| nth_from(leader, i, n_player)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    n_player: usize,
    n_round: usize,
    trump: Option<Suit>,
    predictions: Option<Vec<i32>>,
    /// One entry per opened round; entries after the first are trick winners.
    round_leaders: Vec<PlayerId>,
    /// Per round, one slot per player indexed by player id.
    plays: Vec<Vec<Option<Card>>>,
}

impl Board {
    /// Open the first round with a uniformly random leader.
    pub fn new<R: Rng + ?Sized>(
        n_player: usize,
        n_round: usize,
        trump: Option<Suit>,
        rng: &mut R,
    ) -> Result<Self, DomainError> {
        ensure(n_player > 0, ValidationKind::InvalidConfig, || {
            "n_player should be positive".into()
        })?;
        let leader = rng.random_range(0..n_player);
        Ok(Self::with_leader(n_player, n_round, trump, leader))
    }

    /// # Panics
    ///
    /// If `leader` is not a seat, i.e. `leader >= n_player`.
    pub fn with_leader(
        n_player: usize,
        n_round: usize,
        trump: Option<Suit>,
        leader: PlayerId,
    ) -> Self {
        let mut board = Self {
            n_player,
            n_round,
            trump,
            predictions: None,
            round_leaders: Vec::with_capacity(n_round + 1),
            plays: Vec::with_capacity(n_round + 1),
        };
        board.next_round(leader);
        board
    }

    pub(crate) fn next_round(&mut self, leader: PlayerId) {
        assert!(leader < self.n_player, "leader {leader} out of range");
        self.round_leaders.push(leader);
        self.plays.push(vec![None; self.n_player]);
    }

    pub(crate) fn set_predictions(&mut self, predictions: Vec<i32>) {
        self.predictions = Some(predictions);
    }

    pub(crate) fn record_play(&mut self, player: PlayerId, card: Card) {
        let slot = &mut self.cur_round_plays_mut()[player];
        debug_assert!(slot.is_none(), "slot for player {player} already filled");
        *slot = Some(card);
    }

    fn cur_round_plays_mut(&mut self) -> &mut Vec<Option<Card>> {
        let last = self.plays.len() - 1;
        &mut self.plays[last]
    }

    pub fn n_player(&self) -> usize {
        self.n_player
    }

    pub fn players(&self) -> std::ops::Range<PlayerId> {
        0..self.n_player
    }

    pub fn n_round(&self) -> usize {
        self.n_round
    }

    pub fn trump(&self) -> Option<Suit> {
        self.trump
    }

    pub fn predictions(&self) -> Option<&[i32]> {
        self.predictions.as_deref()
    }

    pub fn round_leaders(&self) -> &[PlayerId] {
        &self.round_leaders
    }

    pub fn plays(&self) -> &[Vec<Option<Card>>] {
        &self.plays
    }

    /// Winners of every closed round, in order.
    pub fn round_winners(&self) -> &[PlayerId] {
        &self.round_leaders[1..]
    }

    pub fn n_finished_round(&self) -> usize {
        self.round_winners().len()
    }

    pub fn cur_round(&self) -> usize {
        self.n_finished_round()
    }

    pub fn cur_leader(&self) -> PlayerId {
        self.round_leaders[self.round_leaders.len() - 1]
    }

    pub fn cur_round_plays(&self) -> &[Option<Card>] {
        &self.plays[self.plays.len() - 1]
    }

    pub fn cur_round_play_order(&self) -> Vec<PlayerId> {
        play_order(self.cur_leader(), self.n_player)
    }

    /// First seat in play order without a card, or `None` once the round is
    /// complete or every round has been played.
    pub fn cur_player(&self) -> Option<PlayerId> {
        if self.n_finished_round() >= self.n_round {
            return None;
        }
        let plays = self.cur_round_plays();
        self.cur_round_play_order()
            .into_iter()
            .find(|&p| plays[p].is_none())
    }

    /// Suit of the first suited card played this round.
    ///
    /// Scanning stops at the first empty slot, so only cards actually played
    /// before the current player count.
    pub fn cur_leading_suit(&self) -> Option<Suit> {
        let plays = self.cur_round_plays();
        for p in self.cur_round_play_order() {
            match plays[p] {
                None => return None,
                Some(card) => {
                    if let Some(suit) = card.suit() {
                        return Some(suit);
                    }
                }
            }
        }
        None
    }

    /// Follow-suit rule for a card of `suit` (None for specials) from `hand`.
    pub fn can_play_suit(&self, suit: Option<Suit>, hand: &Hand) -> bool {
        let Some(suit) = suit else {
            return true;
        };
        match self.cur_leading_suit() {
            None => true,
            Some(leading) => !hand_has_suit(hand, leading) || suit == leading,
        }
    }

    pub fn is_round_play_finished(&self) -> bool {
        self.cur_round_plays().iter().all(Option::is_some)
    }

    /// Rounds won per player.
    pub fn rounds_won(&self) -> Vec<usize> {
        let mut won = vec![0; self.n_player];
        for &winner in self.round_winners() {
            won[winner] += 1;
        }
        won
    }

    pub fn is_all_finished(&self) -> bool {
        self.predictions.is_some() && self.n_finished_round() == self.n_round
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.trump {
            Some(trump) => writeln!(f, "Trump: {trump}")?,
            None => writeln!(f, "Trump: None")?,
        }
        writeln!(
            f,
            "Round: {}/{}",
            (self.cur_round() + 1).min(self.n_round),
            self.n_round
        )?;
        let won = self.rounds_won();
        for p in self.players() {
            let prediction = self
                .predictions
                .as_ref()
                .map_or_else(|| "-".to_string(), |preds| preds[p].to_string());
            writeln!(f, "Player {p}: predicted {prediction}, won {}", won[p])?;
        }
        write!(f, "Plays:")?;
        let plays = self.cur_round_plays();
        for p in self.cur_round_play_order() {
            match plays[p] {
                Some(card) => write!(f, " [{p}: {card}]")?,
                None => write!(f, " [{p}: -]")?,
            }
        }
        Ok(())
    }
}
