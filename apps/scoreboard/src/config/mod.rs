pub mod store;

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

pub const LOG_FORMAT_VAR: &str = "SCOREBOARD_LOG_FORMAT";

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    /// Reads `SCOREBOARD_LOG_FORMAT`; unset means pretty.
    pub fn from_env() -> Result<Self, AppError> {
        match env::var(LOG_FORMAT_VAR) {
            Ok(raw) => raw.parse(),
            Err(_) => Ok(Self::default()),
        }
    }
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::config(format!(
                "{LOG_FORMAT_VAR} must be 'pretty' or 'json', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        })
    }
}
