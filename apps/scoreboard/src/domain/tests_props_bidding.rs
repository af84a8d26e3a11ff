use proptest::prelude::*;

use crate::domain::bidding::{forbidden_bid, remaining_bidder, validate_bid};
use crate::domain::boerenbridge::BoerenBridgeGame;
use crate::domain::rules::BOEREN_BRIDGE_ROUNDS;
use crate::domain::test_gens::seating;
use crate::domain::test_prelude;
use crate::errors::domain::ValidationKind;

/// Game moved to `round` with the first `bidders` players (bidding order) having bid.
fn game_with_bids(
    order: Vec<u32>,
    dealer: usize,
    round: usize,
    raw_bids: &[u8],
    bidders: usize,
) -> BoerenBridgeGame {
    let mut game = BoerenBridgeGame::start(order, dealer);
    for _ in 0..round {
        game.advance_round();
    }
    let cards = game.cards_for_current_round();
    for (&p, &raw) in game.bidding_order().iter().zip(raw_bids).take(bidders) {
        game.record_bid(p, raw % (cards + 1));
    }
    game
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// The forbidden value only exists while exactly one player still has to bid,
    /// and it is the value that would make the bids add up to the hand size.
    #[test]
    fn prop_forbidden_bid_only_for_last_bidder(
        (order, dealer) in seating(6),
        round in 0..BOEREN_BRIDGE_ROUNDS,
        raw_bids in prop::collection::vec(any::<u8>(), 6),
        bidders in 0usize..=6,
    ) {
        let n = order.len();
        let bidders = bidders.min(n);
        let game = game_with_bids(order, dealer, round, &raw_bids, bidders);
        let cards = game.cards_for_current_round();

        match forbidden_bid(&game) {
            Some(value) => {
                prop_assert_eq!(bidders, n - 1);
                prop_assert!(value <= cards);
                prop_assert_eq!(game.total_bids() + i32::from(value), i32::from(cards));
            }
            None => {
                if bidders == n - 1 {
                    prop_assert!(game.total_bids() > i32::from(cards));
                }
            }
        }
    }

    /// The last bidder is rejected exactly on the forbidden value.
    #[test]
    fn prop_last_bidder_rejected_on_forbidden_value(
        (order, dealer) in seating(6),
        round in 0..BOEREN_BRIDGE_ROUNDS,
        raw_bids in prop::collection::vec(any::<u8>(), 6),
        raw_candidate in any::<u8>(),
    ) {
        let n = order.len();
        let game = game_with_bids(order, dealer, round, &raw_bids, n - 1);
        let candidate = raw_candidate % (game.cards_for_current_round() + 1);

        let last = remaining_bidder(&game).expect("one bidder left");
        prop_assert_eq!(Some(last), game.dealer());

        let result = validate_bid(&game, last, candidate);
        if forbidden_bid(&game) == Some(candidate) {
            let err = result.expect_err("forbidden value accepted");
            prop_assert_eq!(err.validation_kind(), Some(ValidationKind::ForbiddenBid));
        } else {
            prop_assert!(result.is_ok());
        }
    }
}
