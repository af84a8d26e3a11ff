//! Domain layer: pure scoring engines and the session coordinator.

pub mod bidding;
pub mod boerenbridge;
pub mod commands;
pub mod roster;
pub mod rules;
pub mod schoppenvrouwen;
pub mod scoring;
pub mod seat_map;
pub mod session;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_boerenbridge;
#[cfg(test)]
mod tests_props_bidding;
#[cfg(test)]
mod tests_session;

// Re-exports for ergonomics
pub use bidding::{forbidden_bid, validate_bid, validate_tricks, validate_tricks_total};
pub use boerenbridge::{BoerenBridgeGame, BoerenBridgeRound};
pub use commands::{Command, Outcome};
pub use roster::{Player, Roster};
pub use rules::{cards_for_round, BOEREN_BRIDGE_ROUNDS, ROUND_SEQUENCE, TARGET_SCORE};
pub use schoppenvrouwen::{SchoppenvrouwenGame, SchoppenvrouwenRound};
pub use scoring::score_for_round;
pub use session::{ActiveGame, CardGame, GameMode, GameSession};
pub use snapshot::{PlayerStanding, StandingsSnapshot};
pub use state::{Phase, PlayerId, Seat, Seating};
