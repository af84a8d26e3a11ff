//! Schoppenvrouwen: open-ended rounds of raw score deltas, first to the
//! target wins.

use serde::{Deserialize, Serialize};

use crate::domain::rules::TARGET_SCORE;
use crate::domain::seat_map::SeatMap;
use crate::domain::state::{saturating_total, Phase, PlayerId, Seat, Seating};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoppenvrouwenRound {
    /// Signed delta per player, unbounded.
    pub scores: SeatMap<i64>,
}

impl SchoppenvrouwenRound {
    pub fn new(players: &[PlayerId]) -> Self {
        Self {
            scores: SeatMap::for_players(players),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.scores.is_complete()
    }
}

/// Schoppenvrouwen session. The current round is always the last element;
/// there is no round bound, only the score threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoppenvrouwenGame {
    #[serde(flatten)]
    pub seating: Seating,
    pub current_round_index: usize,
    pub rounds: Vec<SchoppenvrouwenRound>,
}

impl SchoppenvrouwenGame {
    pub fn start(player_order: Vec<PlayerId>, dealer_index: Seat) -> Self {
        let first = SchoppenvrouwenRound::new(&player_order);
        Self {
            seating: Seating::new(player_order, dealer_index),
            current_round_index: 0,
            rounds: vec![first],
        }
    }

    pub fn current_round(&self) -> Option<&SchoppenvrouwenRound> {
        self.rounds.get(self.current_round_index)
    }

    pub fn dealer(&self) -> Option<PlayerId> {
        self.seating.dealer()
    }

    /// Writes or overwrites a delta in the current round.
    pub fn record_score(&mut self, player: PlayerId, delta: i64) -> bool {
        match self.rounds.get_mut(self.current_round_index) {
            Some(round) => {
                round.scores.set(player, delta);
                true
            }
            None => false,
        }
    }

    /// Corrects a delta in any recorded round.
    ///
    /// # Panics
    /// When `round_index` is past the recorded rounds; callers validate indices.
    pub fn set_score_for_round(&mut self, round_index: usize, player: PlayerId, score: i64) {
        assert!(
            round_index < self.rounds.len(),
            "round index {round_index} out of range ({} rounds)",
            self.rounds.len()
        );
        self.rounds[round_index].scores.set(player, score);
    }

    pub fn player_total(&self, player: PlayerId) -> i64 {
        saturating_total(self.rounds.iter().filter_map(|r| r.scores.get(player)))
    }

    pub fn round_scores(&self, player: PlayerId) -> Vec<i64> {
        self.rounds.iter().filter_map(|r| r.scores.get(player)).collect()
    }

    pub fn is_round_complete(&self) -> bool {
        self.current_round()
            .is_some_and(SchoppenvrouwenRound::is_complete)
    }

    /// Seated players whose total reached the target, in seating order.
    pub fn players_at_target(&self) -> Vec<PlayerId> {
        self.seating
            .player_order
            .iter()
            .copied()
            .filter(|&p| self.player_total(p) >= TARGET_SCORE)
            .collect()
    }

    pub fn is_finished(&self) -> bool {
        !self.players_at_target().is_empty()
    }

    /// Winner once the target is reached.
    ///
    /// Simultaneous finishers are split by the "last finisher" approximation:
    /// the one seated closest before the current dealer (smallest forward
    /// distance to the dealer's seat) is taken to have acted last and wins.
    pub fn winner(&self) -> Option<PlayerId> {
        self.players_at_target()
            .into_iter()
            .filter_map(|p| self.seating.seat_of(p).map(|seat| (p, seat)))
            .min_by_key(|&(_, seat)| self.seating.distance_to_dealer(seat))
            .map(|(p, _)| p)
    }

    pub fn phase(&self) -> Phase {
        if self.is_finished() {
            Phase::Finished
        } else if self.is_round_complete() {
            Phase::RoundComplete {
                round_index: self.current_round_index,
            }
        } else {
            Phase::RoundInProgress {
                round_index: self.current_round_index,
            }
        }
    }

    /// Rotates the dealer and opens the next round together.
    /// No-op (returns `false`) once the game is finished.
    pub fn advance_round(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.seating.rotate_dealer();
        self.current_round_index += 1;
        self.rounds
            .push(SchoppenvrouwenRound::new(&self.seating.player_order));
        true
    }

    pub fn set_player_order(&mut self, player_order: Vec<PlayerId>) {
        if self.seating.dealer_index >= player_order.len() {
            self.seating.dealer_index = 0;
        }
        self.seating.player_order = player_order;
        let order = self.seating.player_order.clone();
        if let Some(round) = self.rounds.get_mut(self.current_round_index) {
            round.scores.reseat(&order);
        }
    }

    pub fn set_dealer_index(&mut self, dealer_index: Seat) -> bool {
        if dealer_index < self.seating.seats() {
            self.seating.dealer_index = dealer_index;
            true
        } else {
            false
        }
    }

    pub fn has_progress(&self) -> bool {
        self.rounds.iter().any(|r| !r.scores.is_empty())
    }

    pub fn ensure_slots(&mut self) {
        let order = self.seating.player_order.clone();
        for round in &mut self.rounds {
            round.scores.ensure_slots(&order);
        }
    }
}
