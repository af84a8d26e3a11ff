pub mod scoreboard;

pub use scoreboard::{CommandReport, ScoreboardService};
