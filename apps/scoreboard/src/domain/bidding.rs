//! Advisory bid legality.
//!
//! `record_bid` stays permissive; callers are expected to run `validate_bid`
//! first and block what it rejects.

use crate::domain::boerenbridge::{BoerenBridgeGame, BoerenBridgeRound};
use crate::domain::rules::valid_bid_range;
use crate::domain::state::PlayerId;
use crate::errors::domain::{DomainError, ValidationKind};

/// The bid value the last remaining bidder may not choose, if any.
///
/// Only defined while exactly one seated player has not bid yet; the value
/// is `cards - sum(bids)` and only forbidden when it lies in `0..=cards`.
pub fn forbidden_bid(game: &BoerenBridgeGame) -> Option<u8> {
    let round = game.current_round()?;
    let seats = game.seating.seats();
    if seats == 0 || round.bids.filled_count() != seats - 1 {
        return None;
    }
    let forbidden = i32::from(round.cards) - round.total_bids();
    if (0..=i32::from(round.cards)).contains(&forbidden) {
        u8::try_from(forbidden).ok()
    } else {
        None
    }
}

/// The single seated player without a bid, if exactly one remains.
pub fn remaining_bidder(game: &BoerenBridgeGame) -> Option<PlayerId> {
    let round = game.current_round()?;
    let mut missing = game
        .bidding_order()
        .into_iter()
        .filter(|&p| !round.bids.contains(p));
    match (missing.next(), missing.next()) {
        (Some(p), None) => Some(p),
        _ => None,
    }
}

/// Checks a bid against the current round without recording it.
pub fn validate_bid(game: &BoerenBridgeGame, player: PlayerId, bid: u8) -> Result<(), DomainError> {
    let round = require_current_round(game)?;
    require_seated(game, player)?;
    if !valid_bid_range(round.cards).contains(&bid) {
        return Err(DomainError::validation(
            ValidationKind::InvalidBid,
            format!("Bid {bid} is outside 0..={}", round.cards),
        ));
    }
    if forbidden_bid(game) == Some(bid) && !round.bids.contains(player) {
        return Err(DomainError::validation(
            ValidationKind::ForbiddenBid,
            format!(
                "Last bidder cannot bid {bid}: total bids would equal {} cards",
                round.cards
            ),
        ));
    }
    Ok(())
}

/// Checks a trick count against the current round. No forbidden value applies.
pub fn validate_tricks(
    game: &BoerenBridgeGame,
    player: PlayerId,
    tricks: u8,
) -> Result<(), DomainError> {
    let round = require_current_round(game)?;
    require_seated(game, player)?;
    if tricks > round.cards {
        return Err(DomainError::validation(
            ValidationKind::InvalidTricks,
            format!("Tricks {tricks} is outside 0..={}", round.cards),
        ));
    }
    Ok(())
}

pub fn tricks_total(round: &BoerenBridgeRound) -> u32 {
    round.tricks.values().map(u32::from).sum()
}

/// Once every trick count is in, they must add up to the hand size.
pub fn validate_tricks_total(round: &BoerenBridgeRound) -> Result<(), DomainError> {
    if !round.tricks.is_complete() {
        return Ok(());
    }
    let total = tricks_total(round);
    if total != u32::from(round.cards) {
        return Err(DomainError::validation(
            ValidationKind::TricksTotalMismatch,
            format!("Total tricks ({total}) must be {}", round.cards),
        ));
    }
    Ok(())
}

fn require_current_round(game: &BoerenBridgeGame) -> Result<&BoerenBridgeRound, DomainError> {
    game.current_round().ok_or_else(|| {
        DomainError::validation(
            ValidationKind::RoundOutOfRange,
            format!("No round at index {}", game.current_round_index),
        )
    })
}

fn require_seated(game: &BoerenBridgeGame, player: PlayerId) -> Result<(), DomainError> {
    if game.seating.is_seated(player) {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::UnknownPlayer,
            format!("Player {player} is not seated"),
        ))
    }
}
