use std::env;
use std::path::PathBuf;

use crate::error::AppError;

pub const STATE_PATH_VAR: &str = "SCOREBOARD_STATE_PATH";
pub const DEFAULT_STATE_PATH: &str = "scoreboard-state.json";

/// Where the session document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub state_path: PathBuf,
}

impl StoreConfig {
    pub fn new(state_path: impl Into<PathBuf>) -> Self {
        Self {
            state_path: state_path.into(),
        }
    }

    /// Reads `SCOREBOARD_STATE_PATH`, falling back to `scoreboard-state.json`
    /// in the working directory. A set but blank value is a configuration error.
    pub fn from_env() -> Result<Self, AppError> {
        match env::var(STATE_PATH_VAR) {
            Ok(raw) if raw.trim().is_empty() => Err(AppError::config(format!(
                "{STATE_PATH_VAR} is set but empty"
            ))),
            Ok(raw) => Ok(Self::new(raw)),
            Err(env::VarError::NotPresent) => Ok(Self::new(DEFAULT_STATE_PATH)),
            Err(env::VarError::NotUnicode(_)) => Err(AppError::config(format!(
                "{STATE_PATH_VAR} is not valid unicode"
            ))),
        }
    }
}
