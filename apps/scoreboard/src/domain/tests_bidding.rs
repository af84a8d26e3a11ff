use crate::domain::bidding::{
    forbidden_bid, remaining_bidder, tricks_total, validate_bid, validate_tricks,
    validate_tricks_total,
};
use crate::domain::boerenbridge::BoerenBridgeGame;
use crate::domain::test_state_helpers::{four_player_boerenbridge, play_to_last_round, A, B, C, D};
use crate::errors::domain::ValidationKind;

#[test]
fn forbidden_bid_only_for_last_bidder() {
    // dealer D → bidding order A, B, C, D; round 1 has 10 cards
    let mut game = four_player_boerenbridge(3);
    assert_eq!(game.bidding_order(), vec![A, B, C, D]);
    assert_eq!(forbidden_bid(&game), None);

    game.record_bid(A, 3);
    game.record_bid(B, 2);
    assert_eq!(forbidden_bid(&game), None);

    game.record_bid(C, 1);
    assert_eq!(forbidden_bid(&game), Some(4));
    assert_eq!(remaining_bidder(&game), Some(D));

    game.record_bid(D, 5);
    assert_eq!(forbidden_bid(&game), None);
    assert_eq!(remaining_bidder(&game), None);
}

#[test]
fn no_forbidden_bid_when_total_already_exceeds_cards() {
    let mut game = four_player_boerenbridge(3);
    game.record_bid(A, 5);
    game.record_bid(B, 5);
    game.record_bid(C, 1);
    // 10 - 11 = -1 is not a bid anyone could make
    assert_eq!(forbidden_bid(&game), None);
}

#[test]
fn forbidden_bid_can_be_zero_or_cards() {
    let mut game = four_player_boerenbridge(3);
    game.record_bid(A, 4);
    game.record_bid(B, 4);
    game.record_bid(C, 2);
    assert_eq!(forbidden_bid(&game), Some(0));

    let mut game = four_player_boerenbridge(3);
    game.record_bid(A, 0);
    game.record_bid(B, 0);
    game.record_bid(C, 0);
    assert_eq!(forbidden_bid(&game), Some(10));
}

#[test]
fn validate_bid_rejects_forbidden_value_for_remaining_player() {
    let mut game = four_player_boerenbridge(3);
    game.record_bid(A, 3);
    game.record_bid(B, 2);
    game.record_bid(C, 1);

    let err = validate_bid(&game, D, 4).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::ForbiddenBid));
    assert!(err.to_string().contains("Last bidder cannot bid 4"));
    assert!(validate_bid(&game, D, 3).is_ok());
    // players who already bid may change their bid freely
    assert!(validate_bid(&game, A, 4).is_ok());
}

#[test]
fn record_bid_stays_permissive() {
    let mut game = four_player_boerenbridge(3);
    game.record_bid(A, 3);
    game.record_bid(B, 2);
    game.record_bid(C, 1);
    assert!(game.record_bid(D, 4));
    assert_eq!(game.total_bids(), 10);
    assert!(game.is_bidding_complete());
}

#[test]
fn validate_bid_range_and_seating() {
    let game = four_player_boerenbridge(0);
    let err = validate_bid(&game, A, 11).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::InvalidBid));
    let err = validate_bid(&game, 42, 1).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::UnknownPlayer));
    assert!(validate_bid(&game, A, 10).is_ok());
    assert!(validate_bid(&game, A, 0).is_ok());
}

#[test]
fn validate_tricks_has_no_forbidden_value() {
    let mut game = four_player_boerenbridge(3);
    for p in [A, B, C, D] {
        game.record_bid(p, 2);
    }
    game.record_tricks(A, 3);
    game.record_tricks(B, 3);
    game.record_tricks(C, 2);
    assert!(validate_tricks(&game, D, 2).is_ok());
    let err = validate_tricks(&game, D, 11).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::InvalidTricks));
}

#[test]
fn tricks_total_must_match_cards_once_complete() {
    let mut game = four_player_boerenbridge(3);
    game.record_tricks(A, 3);
    game.record_tricks(B, 3);
    game.record_tricks(C, 2);
    let round = game.current_round().unwrap();
    // incomplete rounds are not judged
    assert!(validate_tricks_total(round).is_ok());

    game.record_tricks(D, 1);
    let round = game.current_round().unwrap();
    assert_eq!(tricks_total(round), 9);
    let err = validate_tricks_total(round).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::TricksTotalMismatch));

    game.record_tricks(D, 2);
    assert!(validate_tricks_total(game.current_round().unwrap()).is_ok());
}

#[test]
fn single_card_round_forbidden_bid() {
    let mut game = BoerenBridgeGame::start(vec![A, B, C], 0);
    while game.cards_for_current_round() != 1 {
        game.advance_round();
    }
    // bidding order for this round follows the rotated dealer
    let order = game.bidding_order();
    game.record_bid(order[0], 0);
    game.record_bid(order[1], 0);
    assert_eq!(forbidden_bid(&game), Some(1));
    let err = validate_bid(&game, order[2], 1).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::ForbiddenBid));
}

#[test]
fn validate_bid_after_schedule_is_round_out_of_range() {
    let mut game = four_player_boerenbridge(0);
    play_to_last_round(&mut game);
    game.current_round_index = 19;
    let err = validate_bid(&game, A, 0).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::RoundOutOfRange));
    assert_eq!(forbidden_bid(&game), None);
}
