use crate::domain::boerenbridge::BoerenBridgeGame;
use crate::domain::rules::ROUND_SEQUENCE;
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{
    four_player_boerenbridge, play_round, play_to_last_round, A, B, C, D,
};

#[test]
fn start_creates_first_round() {
    let game = four_player_boerenbridge(2);
    assert_eq!(game.current_round_index, 0);
    assert_eq!(game.rounds.len(), 1);
    assert_eq!(game.rounds[0].cards, 10);
    assert_eq!(game.cards_for_current_round(), 10);
    assert_eq!(game.dealer(), Some(C));
    assert_eq!(game.bidding_order(), vec![D, A, B, C]);
    assert!(!game.has_progress());
    assert_eq!(game.phase(), Phase::RoundInProgress { round_index: 0 });
}

#[test]
fn advance_rotates_dealer_and_follows_schedule() {
    let mut game = four_player_boerenbridge(3);
    for i in 1..ROUND_SEQUENCE.len() {
        let dealer_before = game.seating.dealer_index;
        assert!(game.advance_round());
        assert_eq!(game.current_round_index, i);
        assert_eq!(game.seating.dealer_index, (dealer_before + 1) % 4);
        assert_eq!(game.rounds.len(), i + 1);
        assert_eq!(game.rounds[i].cards, ROUND_SEQUENCE[i]);
    }
    assert!(game.is_last_round());
}

#[test]
fn advance_on_last_round_is_noop() {
    let mut game = four_player_boerenbridge(0);
    play_to_last_round(&mut game);
    assert_eq!(game.current_round_index, 18);
    let before = game.clone();
    assert!(!game.advance_round());
    assert_eq!(game, before);
}

#[test]
fn game_finishes_when_last_round_completes() {
    let mut game = four_player_boerenbridge(0);
    play_to_last_round(&mut game);
    assert!(!game.is_finished());

    let cards = game.cards_for_current_round();
    play_round(&mut game, &[0, 0, 0, 0], &[cards, 0, 0, 0]);
    assert!(game.is_finished());
    assert_eq!(game.phase(), Phase::Finished);
    // still no further round
    assert!(!game.advance_round());
}

#[test]
fn game_past_schedule_counts_as_finished() {
    let mut game = four_player_boerenbridge(0);
    game.current_round_index = 19;
    assert!(game.is_finished());
    assert_eq!(game.cards_for_current_round(), 0);
    assert!(!game.record_bid(A, 1));
}

#[test]
fn completed_middle_round_is_not_finished() {
    let mut game = four_player_boerenbridge(0);
    play_round(&mut game, &[1, 1, 1, 1], &[4, 3, 2, 1]);
    assert!(game.is_round_complete(0));
    assert!(!game.is_finished());
    assert_eq!(game.phase(), Phase::RoundComplete { round_index: 0 });
}

#[test]
fn record_overwrites_previous_value() {
    let mut game = four_player_boerenbridge(0);
    game.record_bid(A, 3);
    game.record_bid(A, 5);
    game.record_tricks(A, 1);
    game.record_tricks(A, 2);
    let round = game.current_round().unwrap();
    assert_eq!(round.bids.get(A), Some(5));
    assert_eq!(round.tricks.get(A), Some(2));
    assert!(game.has_progress());
}

#[test]
fn historical_edit_changes_past_round() {
    let mut game = four_player_boerenbridge(3);
    play_round(&mut game, &[3, 2, 4, 0], &[3, 1, 4, 2]);
    game.advance_round();
    assert_eq!(game.player_total(B), -1);

    game.set_tricks_for_round(0, B, 2);
    assert_eq!(game.player_total(B), 7);
    game.set_bid_for_round(0, A, 2);
    assert_eq!(game.player_total(A), -1);
    // current round untouched
    assert_eq!(game.current_round().unwrap().bids.filled_count(), 0);
}

#[test]
#[should_panic(expected = "round index 5 out of range")]
fn historical_edit_out_of_range_fails_fast() {
    let mut game = four_player_boerenbridge(0);
    game.set_bid_for_round(5, A, 1);
}

#[test]
#[should_panic(expected = "out of range")]
fn historical_tricks_edit_out_of_range_fails_fast() {
    let mut game = four_player_boerenbridge(0);
    game.set_tricks_for_round(1, A, 1);
}

#[test]
fn set_player_order_reseats_current_round() {
    let mut game = four_player_boerenbridge(3);
    game.record_bid(B, 2);
    game.record_bid(D, 1);
    game.set_player_order(vec![B, C, D]);
    // dealer index 3 no longer exists
    assert_eq!(game.seating.dealer_index, 0);
    let round = game.current_round().unwrap();
    assert_eq!(round.bids.get(B), Some(2));
    assert_eq!(round.bids.get(D), Some(1));
    assert_eq!(round.bids.get(A), None);
    assert_eq!(round.bids.missing(), vec![C]);
}

#[test]
fn set_dealer_index_ignores_non_seats() {
    let mut game = four_player_boerenbridge(0);
    assert!(game.set_dealer_index(2));
    assert_eq!(game.dealer(), Some(C));
    assert!(!game.set_dealer_index(4));
    assert_eq!(game.dealer(), Some(C));
}

#[test]
fn degenerate_table_does_not_divide_by_zero() {
    let mut game = BoerenBridgeGame::start(Vec::new(), 0);
    assert!(game.advance_round());
    assert_eq!(game.seating.dealer_index, 0);
    assert!(game.bidding_order().is_empty());
    assert!(!game.is_round_complete(1));
}

#[test]
fn sparse_rounds_get_slots_after_ensure() {
    let json = r#"{
        "playerOrder": [1, 2],
        "dealerIndex": 0,
        "currentRoundIndex": 0,
        "rounds": [{"cards": 10, "bids": {"1": 4}, "tricks": {}}]
    }"#;
    let mut game: BoerenBridgeGame = serde_json::from_str(json).unwrap();
    assert_eq!(game.current_round().unwrap().bids.get(1), Some(4));
    game.ensure_slots();
    let round = game.current_round().unwrap();
    assert_eq!(round.bids.missing(), vec![2]);
    assert_eq!(round.tricks.missing(), vec![1, 2]);
}
