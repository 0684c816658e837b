//! RNG seed derivation utilities for deterministic match batches.
//!
//! A batch of matches shares one base seed; every match and every seat in it
//! gets its own derived seed so a single match can be replayed in isolation.

/// Derive the dealing seed for the `match_no`-th match of a batch.
///
/// # Arguments
///
/// * `base_seed` - Seed of the whole batch
/// * `match_no` - 1-based match number within the batch
pub fn derive_game_seed(base_seed: u64, match_no: u32) -> u64 {
    base_seed
        .wrapping_add((match_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2) // Offset to distinguish from strategy seeds
}

/// Derive the seed for the strategy sitting at `seat` in one match.
///
/// Same batch + match + seat = same decisions; different seats never share
/// a random stream.
pub fn derive_strategy_seed(base_seed: u64, match_no: u32, seat: usize) -> u64 {
    base_seed
        .wrapping_add((match_no as u64).wrapping_mul(10_000))
        .wrapping_add((seat as u64).wrapping_mul(100))
        .wrapping_add(1)
}
