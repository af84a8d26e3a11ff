#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;
pub mod store;
pub mod telemetry;


// Re-exports for public API
pub use config::store::StoreConfig;
pub use config::LogFormat;
pub use domain::{Command, GameMode, GameSession, Outcome, Roster, StandingsSnapshot};
pub use error::AppError;
pub use services::{CommandReport, ScoreboardService};
pub use store::{JsonFileStore, MemoryStore, SessionStore, StoredState};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
