use std::ops::RangeInclusive;

/// Boerenbridge round count.
pub const BOEREN_BRIDGE_ROUNDS: usize = 19;

// Hand-size schedule: 10 → 9 → ... → 1 → 2 → ... → 10
pub const ROUND_SEQUENCE: [u8; BOEREN_BRIDGE_ROUNDS] =
    [10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

/// Flat bonus for an exact prediction.
pub const EXACT_BID_BONUS: i32 = 5;

/// Schoppenvrouwen ends once any cumulative total reaches this.
pub const TARGET_SCORE: i64 = 1000;

/// Hand size for a 0-based round index, `None` once the sequence is exhausted.
pub fn cards_for_round(round_index: usize) -> Option<u8> {
    ROUND_SEQUENCE.get(round_index).copied()
}

pub fn valid_bid_range(cards: u8) -> RangeInclusive<u8> {
    0..=cards
}
