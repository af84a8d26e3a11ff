//! Persistence adapter: the whole scoreboard as one JSON document.
//!
//! Top-level keys follow the browser storage keys (`gameMode`,
//! `boerenBridgeGame`, `schoppenvrouwenGame`, `players`) so existing exports
//! load unchanged. Only the slot matching `gameMode` becomes the session.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::boerenbridge::BoerenBridgeGame;
use crate::domain::roster::Roster;
use crate::domain::schoppenvrouwen::SchoppenvrouwenGame;
use crate::domain::session::{CardGame, GameMode, GameSession};
use crate::domain::state::Seating;
use crate::error::AppError;

/// Everything a scoreboard keeps between commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredState {
    pub session: GameSession,
    pub roster: Roster,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StateDocument {
    #[serde(default)]
    game_mode: Option<GameMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    boeren_bridge_game: Option<BoerenBridgeGame>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    schoppenvrouwen_game: Option<SchoppenvrouwenGame>,
    #[serde(default)]
    players: Roster,
}

impl StoredState {
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let doc: StateDocument = serde_json::from_str(raw)?;
        Ok(doc.into())
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        let doc = StateDocument::from(self);
        Ok(serde_json::to_string_pretty(&doc)?)
    }
}

impl From<StateDocument> for StoredState {
    fn from(doc: StateDocument) -> Self {
        let session = match doc.game_mode {
            None => {
                if doc.boeren_bridge_game.is_some() || doc.schoppenvrouwen_game.is_some() {
                    debug!("document has game data but no mode; starting uninitialized");
                }
                GameSession::Uninitialized
            }
            Some(GameMode::Generic) => GameSession::Generic,
            Some(GameMode::BoerenBridge) => match doc.boeren_bridge_game {
                Some(mut game) => {
                    repair_seating(&mut game.seating);
                    game.ensure_slots();
                    GameSession::BoerenBridge(game)
                }
                None => GameSession::AwaitingSetup(CardGame::BoerenBridge),
            },
            Some(GameMode::Schoppenvrouwen) => match doc.schoppenvrouwen_game {
                Some(mut game) => {
                    repair_seating(&mut game.seating);
                    game.ensure_slots();
                    GameSession::Schoppenvrouwen(game)
                }
                None => GameSession::AwaitingSetup(CardGame::Schoppenvrouwen),
            },
        };
        StoredState {
            session,
            roster: doc.players,
        }
    }
}

impl From<&StoredState> for StateDocument {
    fn from(state: &StoredState) -> Self {
        StateDocument {
            game_mode: state.session.mode(),
            boeren_bridge_game: state.session.boerenbridge().cloned(),
            schoppenvrouwen_game: state.session.schoppenvrouwen().cloned(),
            players: state.roster.clone(),
        }
    }
}

/// Hand-edited documents can point the dealer past the table.
fn repair_seating(seating: &mut Seating) {
    if seating.dealer_index >= seating.seats() && seating.seats() > 0 {
        warn!(
            dealer_index = seating.dealer_index,
            seats = seating.seats(),
            "dealer index out of range in stored game; using seat 0"
        );
        seating.dealer_index = 0;
    }
}

/// Load/save boundary for the CLI and tests.
pub trait SessionStore {
    fn load(&self) -> Result<StoredState, AppError>;
    fn save(&self, state: &StoredState) -> Result<(), AppError>;
}

/// One JSON file on disk. Writes go through a sibling temp file and a rename.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "scoreboard-state.json".to_string());
        self.path.with_file_name(format!(".{name}.tmp"))
    }
}

impl SessionStore for JsonFileStore {
    fn load(&self) -> Result<StoredState, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let state = StoredState::from_json(&raw)?;
                debug!(path = %self.path.display(), mode = ?state.session.mode(), "state loaded");
                Ok(state)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no state file yet; starting empty");
                Ok(StoredState::default())
            }
            Err(err) => Err(AppError::storage(format!(
                "cannot read {}: {err}",
                self.path.display()
            ))),
        }
    }

    fn save(&self, state: &StoredState) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.temp_path();
        fs::write(&tmp, state.to_json()?)?;
        fs::rename(&tmp, &self.path).map_err(|err| {
            AppError::storage(format!("cannot replace {}: {err}", self.path.display()))
        })?;
        debug!(path = %self.path.display(), "state saved");
        Ok(())
    }
}

/// In-process store holding the serialized document, so saves and loads go
/// through the same JSON mapping as the file store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw document.
    pub fn with_document(raw: impl Into<String>) -> Self {
        Self {
            document: Mutex::new(Some(raw.into())),
        }
    }

    pub fn document(&self) -> Option<String> {
        self.document.lock().clone()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<StoredState, AppError> {
        let doc = self.document.lock();
        match doc.as_deref() {
            Some(raw) => StoredState::from_json(raw),
            None => Ok(StoredState::default()),
        }
    }

    fn save(&self, state: &StoredState) -> Result<(), AppError> {
        let raw = state.to_json()?;
        *self.document.lock() = Some(raw);
        Ok(())
    }
}
