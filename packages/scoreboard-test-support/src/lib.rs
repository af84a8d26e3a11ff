//! Scoreboard test support utilities
//!
//! Shared helpers for the scoreboard integration tests: unified logging
//! initialization.

pub mod logging;
