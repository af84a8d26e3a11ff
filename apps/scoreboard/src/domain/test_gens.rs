// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::state::PlayerId;

/// Unique player ids in a random seating order, 2..=max players.
pub fn player_order(max: usize) -> impl Strategy<Value = Vec<PlayerId>> {
    prop::collection::btree_set(1u32..=500, 2..=max)
        .prop_map(|ids| ids.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

/// A seating order together with a valid dealer index.
pub fn seating(max: usize) -> impl Strategy<Value = (Vec<PlayerId>, usize)> {
    player_order(max).prop_flat_map(|order| {
        let n = order.len();
        (Just(order), 0..n)
    })
}

/// (bid, tricks) pair within one hand size.
pub fn bid_and_tricks() -> impl Strategy<Value = (u8, u8)> {
    (1u8..=10).prop_flat_map(|cards| (0..=cards, 0..=cards))
}
