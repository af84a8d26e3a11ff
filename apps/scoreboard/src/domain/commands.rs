//! Command surface over [`GameSession`] for adapters (CLI, persistence replay).

use serde::{Deserialize, Serialize};

use crate::domain::session::{GameMode, GameSession};
use crate::domain::state::{PlayerId, Seat};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    SelectMode { mode: GameMode },
    StartBoerenBridge { player_order: Vec<PlayerId>, dealer_index: Seat },
    StartSchoppenvrouwen { player_order: Vec<PlayerId>, dealer_index: Seat },
    RecordBid { player: PlayerId, bid: u8 },
    RecordTricks { player: PlayerId, tricks: u8 },
    RecordScore { player: PlayerId, score: i64 },
    AdvanceRound,
    SetBidForRound { round_index: usize, player: PlayerId, bid: u8 },
    SetTricksForRound { round_index: usize, player: PlayerId, tricks: u8 },
    SetScoreForRound { round_index: usize, player: PlayerId, score: i64 },
    SetPlayerOrder { player_order: Vec<PlayerId> },
    SetDealerIndex { dealer_index: Seat },
    Reset,
}

/// Whether a command changed the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Applied,
    Ignored,
}

impl From<bool> for Outcome {
    fn from(changed: bool) -> Self {
        if changed {
            Outcome::Applied
        } else {
            Outcome::Ignored
        }
    }
}

impl GameSession {
    /// Applies one command. Commands that do not fit the session are ignored.
    ///
    /// Historical edits are bounds-checked here and reported as
    /// `RoundOutOfRange` so the engine assertion is never reached from input.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, DomainError> {
        let outcome = match command {
            Command::SelectMode { mode } => {
                self.select_mode(mode)?;
                Outcome::Applied
            }
            Command::StartBoerenBridge {
                player_order,
                dealer_index,
            } => {
                self.start_boerenbridge(player_order, dealer_index);
                Outcome::Applied
            }
            Command::StartSchoppenvrouwen {
                player_order,
                dealer_index,
            } => {
                self.start_schoppenvrouwen(player_order, dealer_index);
                Outcome::Applied
            }
            Command::RecordBid { player, bid } => self.record_bid(player, bid).into(),
            Command::RecordTricks { player, tricks } => self.record_tricks(player, tricks).into(),
            Command::RecordScore { player, score } => self.record_score(player, score).into(),
            Command::AdvanceRound => self.advance_round().into(),
            Command::SetBidForRound {
                round_index,
                player,
                bid,
            } => {
                if self.boerenbridge().is_none() {
                    return Ok(Outcome::Ignored);
                }
                self.require_round(round_index)?;
                self.set_bid_for_round(round_index, player, bid);
                Outcome::Applied
            }
            Command::SetTricksForRound {
                round_index,
                player,
                tricks,
            } => {
                if self.boerenbridge().is_none() {
                    return Ok(Outcome::Ignored);
                }
                self.require_round(round_index)?;
                self.set_tricks_for_round(round_index, player, tricks);
                Outcome::Applied
            }
            Command::SetScoreForRound {
                round_index,
                player,
                score,
            } => {
                if self.schoppenvrouwen().is_none() {
                    return Ok(Outcome::Ignored);
                }
                self.require_round(round_index)?;
                self.set_score_for_round(round_index, player, score);
                Outcome::Applied
            }
            Command::SetPlayerOrder { player_order } => self.set_player_order(player_order).into(),
            Command::SetDealerIndex { dealer_index } => self.set_dealer_index(dealer_index).into(),
            Command::Reset => {
                self.reset();
                Outcome::Applied
            }
        };
        Ok(outcome)
    }

    fn require_round(&self, round_index: usize) -> Result<(), DomainError> {
        let rounds = self.round_count();
        if round_index < rounds {
            Ok(())
        } else {
            Err(DomainError::validation(
                ValidationKind::RoundOutOfRange,
                format!("Round {} does not exist ({rounds} recorded)", round_index + 1),
            ))
        }
    }
}
