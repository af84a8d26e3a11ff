use crate::domain::boerenbridge::BoerenBridgeRound;
use crate::domain::rules::EXACT_BID_BONUS;
use crate::domain::state::PlayerId;

/// Boerenbridge score for one player in one round.
///
/// An exact prediction earns the flat bonus plus the trick count; any miss
/// costs the absolute deviation, in either direction.
pub fn score_for_round(bid: u8, tricks: u8) -> i32 {
    if bid == tricks {
        EXACT_BID_BONUS + i32::from(tricks)
    } else {
        -(i32::from(bid) - i32::from(tricks)).abs()
    }
}

/// Score of `player` in `round`, present only once both bid and tricks exist.
pub fn round_score(round: &BoerenBridgeRound, player: PlayerId) -> Option<i32> {
    let bid = round.bids.get(player)?;
    let tricks = round.tricks.get(player)?;
    Some(score_for_round(bid, tricks))
}
