pub const SUITS: usize = 4;
pub const RANKS: usize = 13;
pub const SUIT_CARDS: usize = SUITS * RANKS;

pub const DEFAULT_PLAYERS: usize = 4;
pub const DEFAULT_WIZARDS: usize = 4;
pub const DEFAULT_JESTERS: usize = 4;

/// Wizards and jesters are numbered with a `u8`.
pub const MAX_SPECIAL_CARDS: usize = u8::MAX as usize + 1;

pub fn deck_size(n_wizard: usize, n_jester: usize) -> usize {
    SUIT_CARDS + n_wizard + n_jester
}

/// Rounds played when the configuration leaves it open.
///
/// One card is always held back so the remainder pile can name trump.
pub fn default_round_count(deck_size: usize, n_player: usize) -> usize {
    if n_player == 0 {
        return 0;
    }
    deck_size.saturating_sub(1) / n_player
}
