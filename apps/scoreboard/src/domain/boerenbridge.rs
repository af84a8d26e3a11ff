//! Boerenbridge: 19 fixed rounds (10 → 1 → 10 cards), bid then tricks.

use serde::{Deserialize, Serialize};

use crate::domain::rules::{cards_for_round, BOEREN_BRIDGE_ROUNDS};
use crate::domain::scoring::round_score;
use crate::domain::seat_map::SeatMap;
use crate::domain::state::{Phase, PlayerId, Seat, Seating};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoerenBridgeRound {
    /// Hand size, fixed at round creation from the schedule.
    pub cards: u8,
    pub bids: SeatMap<u8>,
    pub tricks: SeatMap<u8>,
}

impl BoerenBridgeRound {
    pub fn new(cards: u8, players: &[PlayerId]) -> Self {
        Self {
            cards,
            bids: SeatMap::for_players(players),
            tricks: SeatMap::for_players(players),
        }
    }

    pub fn total_bids(&self) -> i32 {
        self.bids.values().map(i32::from).sum()
    }

    /// Every seated player has both a bid and a trick count.
    pub fn is_complete(&self) -> bool {
        self.bids.is_complete() && self.tricks.is_complete()
    }

    pub fn has_progress(&self) -> bool {
        !self.bids.is_empty() || !self.tricks.is_empty()
    }
}

/// Boerenbridge session. While in progress `rounds.len() == current_round_index + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoerenBridgeGame {
    #[serde(flatten)]
    pub seating: Seating,
    pub current_round_index: usize,
    pub rounds: Vec<BoerenBridgeRound>,
}

impl BoerenBridgeGame {
    /// New game at round 0 with its empty round pre-created.
    ///
    /// At least two players are expected; fewer is tolerated but meaningless.
    pub fn start(player_order: Vec<PlayerId>, dealer_index: Seat) -> Self {
        let first = BoerenBridgeRound::new(cards_for_round(0).unwrap_or(0), &player_order);
        Self {
            seating: Seating::new(player_order, dealer_index),
            current_round_index: 0,
            rounds: vec![first],
        }
    }

    pub fn current_round(&self) -> Option<&BoerenBridgeRound> {
        self.rounds.get(self.current_round_index)
    }

    fn current_round_mut(&mut self) -> Option<&mut BoerenBridgeRound> {
        self.rounds.get_mut(self.current_round_index)
    }

    /// Hand size of the current round, 0 once past the schedule.
    pub fn cards_for_current_round(&self) -> u8 {
        cards_for_round(self.current_round_index).unwrap_or(0)
    }

    pub fn dealer(&self) -> Option<PlayerId> {
        self.seating.dealer()
    }

    /// Bidding order for the current round: starts left of the dealer.
    pub fn bidding_order(&self) -> Vec<PlayerId> {
        self.seating.acting_order()
    }

    pub fn total_bids(&self) -> i32 {
        self.current_round().map_or(0, BoerenBridgeRound::total_bids)
    }

    /// Writes or overwrites a bid in the current round.
    /// Returns `false` (nothing written) when there is no current round.
    pub fn record_bid(&mut self, player: PlayerId, bid: u8) -> bool {
        match self.current_round_mut() {
            Some(round) => {
                round.bids.set(player, bid);
                true
            }
            None => false,
        }
    }

    /// Writes or overwrites a trick count in the current round.
    pub fn record_tricks(&mut self, player: PlayerId, tricks: u8) -> bool {
        match self.current_round_mut() {
            Some(round) => {
                round.tricks.set(player, tricks);
                true
            }
            None => false,
        }
    }

    /// Corrects a bid in any recorded round.
    ///
    /// # Panics
    /// When `round_index` is past the recorded rounds; callers validate indices.
    pub fn set_bid_for_round(&mut self, round_index: usize, player: PlayerId, bid: u8) {
        assert!(
            round_index < self.rounds.len(),
            "round index {round_index} out of range ({} rounds)",
            self.rounds.len()
        );
        self.rounds[round_index].bids.set(player, bid);
    }

    /// Corrects a trick count in any recorded round.
    ///
    /// # Panics
    /// When `round_index` is past the recorded rounds; callers validate indices.
    pub fn set_tricks_for_round(&mut self, round_index: usize, player: PlayerId, tricks: u8) {
        assert!(
            round_index < self.rounds.len(),
            "round index {round_index} out of range ({} rounds)",
            self.rounds.len()
        );
        self.rounds[round_index].tricks.set(player, tricks);
    }

    /// Sum of round scores over every round where the player has both values.
    pub fn player_total(&self, player: PlayerId) -> i32 {
        self.rounds.iter().filter_map(|r| round_score(r, player)).sum()
    }

    /// Per-round scores of `player`, skipping rounds without both values.
    pub fn round_scores(&self, player: PlayerId) -> Vec<i32> {
        self.rounds.iter().filter_map(|r| round_score(r, player)).collect()
    }

    pub fn is_bidding_complete(&self) -> bool {
        self.current_round().is_some_and(|r| r.bids.is_complete())
    }

    pub fn is_tricks_complete(&self) -> bool {
        self.current_round().is_some_and(|r| r.tricks.is_complete())
    }

    pub fn is_round_complete(&self, round_index: usize) -> bool {
        self.rounds.get(round_index).is_some_and(BoerenBridgeRound::is_complete)
    }

    pub fn is_last_round(&self) -> bool {
        self.current_round_index + 1 == BOEREN_BRIDGE_ROUNDS
    }

    /// Finished once past the schedule, or on the last round with it complete.
    pub fn is_finished(&self) -> bool {
        self.current_round_index >= BOEREN_BRIDGE_ROUNDS
            || (self.is_last_round() && self.is_round_complete(self.current_round_index))
    }

    pub fn phase(&self) -> Phase {
        if self.is_finished() {
            Phase::Finished
        } else if self.is_round_complete(self.current_round_index) {
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
    /// No-op (returns `false`) once the schedule is exhausted.
    pub fn advance_round(&mut self) -> bool {
        let next = self.current_round_index + 1;
        let Some(cards) = cards_for_round(next) else {
            return false;
        };
        self.seating.rotate_dealer();
        self.current_round_index = next;
        self.rounds
            .push(BoerenBridgeRound::new(cards, &self.seating.player_order));
        true
    }

    /// Replaces the seating; the current round is re-keyed to the new order.
    pub fn set_player_order(&mut self, player_order: Vec<PlayerId>) {
        if self.seating.dealer_index >= player_order.len() {
            self.seating.dealer_index = 0;
        }
        self.seating.player_order = player_order;
        let order = self.seating.player_order.clone();
        if let Some(round) = self.current_round_mut() {
            round.bids.reseat(&order);
            round.tricks.reseat(&order);
        }
    }

    /// Moves the deal; ignored when `dealer_index` is not a seat.
    pub fn set_dealer_index(&mut self, dealer_index: Seat) -> bool {
        if dealer_index < self.seating.seats() {
            self.seating.dealer_index = dealer_index;
            true
        } else {
            false
        }
    }

    /// At least one bid or trick count recorded anywhere in the history.
    pub fn has_progress(&self) -> bool {
        self.rounds.iter().any(BoerenBridgeRound::has_progress)
    }

    /// Gives every round an empty slot for each seated player (sparse documents).
    pub fn ensure_slots(&mut self) {
        let order = self.seating.player_order.clone();
        for round in &mut self.rounds {
            round.bids.ensure_slots(&order);
            round.tricks.ensure_slots(&order);
        }
    }
}
