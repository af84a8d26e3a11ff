use serde::{Deserialize, Serialize};

/// Stable roster id; the engines only reference players, never own them.
pub type PlayerId = u32;
/// Index into the seating order.
pub type Seat = usize;

/// Seat / turn math helpers over a table of `seats` players.
///
/// These live in `domain` so both engines share a single source of truth for
/// rotation and "who acts next". Forward (clockwise) is positive.
/// A table with zero seats maps every seat to 0.
#[inline]
pub fn seat_offset(seat: Seat, delta: isize, seats: usize) -> Seat {
    if seats == 0 {
        return 0;
    }
    (seat as isize + delta).rem_euclid(seats as isize) as Seat
}

/// Returns the next seat forward, wrapping at `seats`.
#[inline]
pub fn next_seat(seat: Seat, seats: usize) -> Seat {
    seat_offset(seat, 1, seats)
}

/// Round-start seat (player to the left of the dealer).
#[inline]
pub fn round_start_seat(dealer: Seat, seats: usize) -> Seat {
    next_seat(dealer, seats)
}

/// Sum of score deltas, pinned at the `i64` bounds instead of wrapping.
pub fn saturating_total(deltas: impl IntoIterator<Item = i64>) -> i64 {
    deltas.into_iter().fold(0i64, i64::saturating_add)
}

/// Progress of a started game. `Uninitialized` lives on the session, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Phase {
    /// The current round still has empty slots.
    RoundInProgress { round_index: usize },
    /// Every seated player has filled in the current round.
    RoundComplete { round_index: usize },
    /// Terminal until the session is reset.
    Finished,
}

/// Seating order and dealer position, shared by both engines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seating {
    /// Player ids in seating order (unique).
    pub player_order: Vec<PlayerId>,
    /// Index in `player_order` of the current dealer.
    pub dealer_index: Seat,
}

impl Seating {
    pub fn new(player_order: Vec<PlayerId>, dealer_index: Seat) -> Self {
        Self {
            player_order,
            dealer_index,
        }
    }

    pub fn seats(&self) -> usize {
        self.player_order.len()
    }

    pub fn dealer(&self) -> Option<PlayerId> {
        self.player_order.get(self.dealer_index).copied()
    }

    pub fn seat_of(&self, player: PlayerId) -> Option<Seat> {
        self.player_order.iter().position(|&p| p == player)
    }

    pub fn is_seated(&self, player: PlayerId) -> bool {
        self.seat_of(player).is_some()
    }

    /// Acting order for a round: the seating order rotated so the player
    /// immediately after the dealer comes first. The dealer acts last.
    pub fn acting_order(&self) -> Vec<PlayerId> {
        let n = self.seats();
        let start = round_start_seat(self.dealer_index, n);
        (0..n)
            .map(|k| self.player_order[seat_offset(start, k as isize, n)])
            .collect()
    }

    /// Forward distance from `seat` to the dealer: `(dealer - seat + n) mod n`.
    /// The dealer is at distance 0, the player just before the dealer at 1.
    pub fn distance_to_dealer(&self, seat: Seat) -> usize {
        let n = self.seats();
        if n == 0 {
            return 0;
        }
        (self.dealer_index % n + n - seat % n) % n
    }

    /// Moves the deal one seat forward.
    pub fn rotate_dealer(&mut self) {
        self.dealer_index = next_seat(self.dealer_index, self.seats());
    }
}
