//! Game-mode coordinator: one tagged session instead of independently
//! nullable per-mode slots.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::boerenbridge::BoerenBridgeGame;
use crate::domain::schoppenvrouwen::SchoppenvrouwenGame;
use crate::domain::state::{PlayerId, Seat};
use crate::errors::domain::{ConflictKind, DomainError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Generic,
    BoerenBridge,
    Schoppenvrouwen,
}

impl GameMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            GameMode::Generic => "generic",
            GameMode::BoerenBridge => "boerenbridge",
            GameMode::Schoppenvrouwen => "schoppenvrouwen",
        }
    }
}

/// Modes backed by a typed engine session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardGame {
    BoerenBridge,
    Schoppenvrouwen,
}

impl From<CardGame> for GameMode {
    fn from(game: CardGame) -> Self {
        match game {
            CardGame::BoerenBridge => GameMode::BoerenBridge,
            CardGame::Schoppenvrouwen => GameMode::Schoppenvrouwen,
        }
    }
}

/// Answer of [`GameSession::has_active_game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActiveGame {
    pub active: bool,
    pub mode: Option<GameMode>,
}

/// The single session a scoreboard holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GameSession {
    #[default]
    Uninitialized,
    /// Mode chosen, seating not set up yet.
    AwaitingSetup(CardGame),
    /// Free-form scores; the data lives in the roster.
    Generic,
    BoerenBridge(BoerenBridgeGame),
    Schoppenvrouwen(SchoppenvrouwenGame),
}

impl GameSession {
    pub fn mode(&self) -> Option<GameMode> {
        match self {
            GameSession::Uninitialized => None,
            GameSession::AwaitingSetup(game) => Some((*game).into()),
            GameSession::Generic => Some(GameMode::Generic),
            GameSession::BoerenBridge(_) => Some(GameMode::BoerenBridge),
            GameSession::Schoppenvrouwen(_) => Some(GameMode::Schoppenvrouwen),
        }
    }

    pub fn boerenbridge(&self) -> Option<&BoerenBridgeGame> {
        match self {
            GameSession::BoerenBridge(game) => Some(game),
            _ => None,
        }
    }

    pub fn schoppenvrouwen(&self) -> Option<&SchoppenvrouwenGame> {
        match self {
            GameSession::Schoppenvrouwen(game) => Some(game),
            _ => None,
        }
    }

    fn boerenbridge_mut(&mut self, op: &'static str) -> Option<&mut BoerenBridgeGame> {
        let mode = self.mode();
        match self {
            GameSession::BoerenBridge(game) => Some(game),
            _ => {
                debug!(op, ?mode, "ignoring command: no boerenbridge game");
                None
            }
        }
    }

    fn schoppenvrouwen_mut(&mut self, op: &'static str) -> Option<&mut SchoppenvrouwenGame> {
        let mode = self.mode();
        match self {
            GameSession::Schoppenvrouwen(game) => Some(game),
            _ => {
                debug!(op, ?mode, "ignoring command: no schoppenvrouwen game");
                None
            }
        }
    }

    /// Progress means at least one value recorded anywhere in the history.
    /// Generic counts as active from the mode alone.
    pub fn has_active_game(&self) -> ActiveGame {
        let active = match self {
            GameSession::Uninitialized | GameSession::AwaitingSetup(_) => false,
            GameSession::Generic => true,
            GameSession::BoerenBridge(game) => game.has_progress(),
            GameSession::Schoppenvrouwen(game) => game.has_progress(),
        };
        ActiveGame {
            active,
            mode: if active { self.mode() } else { None },
        }
    }

    pub fn is_finished(&self) -> bool {
        match self {
            GameSession::BoerenBridge(game) => game.is_finished(),
            GameSession::Schoppenvrouwen(game) => game.is_finished(),
            _ => false,
        }
    }

    /// Selects a mode. Re-selecting the current mode keeps its game.
    ///
    /// Switching away from a game with progress is refused: overwriting it is
    /// the caller's decision and must go through an explicit [`reset`](Self::reset).
    pub fn select_mode(&mut self, mode: GameMode) -> Result<(), DomainError> {
        if self.mode() == Some(mode) {
            return Ok(());
        }
        let current = self.has_active_game();
        if current.active {
            let active_mode = current.mode.map_or("unknown", |m| m.as_str());
            return Err(DomainError::conflict(
                ConflictKind::ActiveGame,
                format!(
                    "A {active_mode} game is in progress; reset it before switching to {}",
                    mode.as_str()
                ),
            ));
        }
        *self = match mode {
            GameMode::Generic => GameSession::Generic,
            GameMode::BoerenBridge => GameSession::AwaitingSetup(CardGame::BoerenBridge),
            GameMode::Schoppenvrouwen => GameSession::AwaitingSetup(CardGame::Schoppenvrouwen),
        };
        info!(mode = mode.as_str(), "game mode selected");
        Ok(())
    }

    /// Starts (or overwrites with) a fresh Boerenbridge game.
    pub fn start_boerenbridge(&mut self, player_order: Vec<PlayerId>, dealer_index: Seat) {
        info!(players = player_order.len(), dealer_index, "starting boerenbridge");
        *self = GameSession::BoerenBridge(BoerenBridgeGame::start(player_order, dealer_index));
    }

    /// Starts (or overwrites with) a fresh Schoppenvrouwen game.
    pub fn start_schoppenvrouwen(&mut self, player_order: Vec<PlayerId>, dealer_index: Seat) {
        info!(players = player_order.len(), dealer_index, "starting schoppenvrouwen");
        *self = GameSession::Schoppenvrouwen(SchoppenvrouwenGame::start(
            player_order,
            dealer_index,
        ));
    }

    /// Runs a mutation and logs the transition into the finished state.
    fn watch_finish<R>(&mut self, op: &'static str, apply: impl FnOnce(&mut Self) -> R) -> R {
        let was_finished = self.is_finished();
        let out = apply(self);
        if !was_finished && self.is_finished() {
            info!(mode = ?self.mode(), op, "game finished");
        }
        out
    }

    pub fn record_bid(&mut self, player: PlayerId, bid: u8) -> bool {
        self.watch_finish("record_bid", |s| {
            s.boerenbridge_mut("record_bid")
                .is_some_and(|game| game.record_bid(player, bid))
        })
    }

    pub fn record_tricks(&mut self, player: PlayerId, tricks: u8) -> bool {
        self.watch_finish("record_tricks", |s| {
            s.boerenbridge_mut("record_tricks")
                .is_some_and(|game| game.record_tricks(player, tricks))
        })
    }

    pub fn record_score(&mut self, player: PlayerId, delta: i64) -> bool {
        self.watch_finish("record_score", |s| {
            s.schoppenvrouwen_mut("record_score")
                .is_some_and(|game| game.record_score(player, delta))
        })
    }

    /// Advances the typed game, if any. Returns whether a new round opened.
    pub fn advance_round(&mut self) -> bool {
        self.watch_finish("advance_round", |s| {
            let mode = s.mode();
            let advanced = match s {
                GameSession::BoerenBridge(game) => game.advance_round(),
                GameSession::Schoppenvrouwen(game) => game.advance_round(),
                _ => {
                    debug!(?mode, "ignoring advance: no card game");
                    return false;
                }
            };
            if advanced {
                debug!(?mode, "advanced to next round");
            } else {
                info!(?mode, "advance ignored: game has no further rounds");
            }
            advanced
        })
    }

    /// See [`BoerenBridgeGame::set_bid_for_round`] for the index contract.
    pub fn set_bid_for_round(&mut self, round_index: usize, player: PlayerId, bid: u8) {
        self.watch_finish("set_bid_for_round", |s| {
            if let Some(game) = s.boerenbridge_mut("set_bid_for_round") {
                game.set_bid_for_round(round_index, player, bid);
            }
        })
    }

    pub fn set_tricks_for_round(&mut self, round_index: usize, player: PlayerId, tricks: u8) {
        self.watch_finish("set_tricks_for_round", |s| {
            if let Some(game) = s.boerenbridge_mut("set_tricks_for_round") {
                game.set_tricks_for_round(round_index, player, tricks);
            }
        })
    }

    pub fn set_score_for_round(&mut self, round_index: usize, player: PlayerId, score: i64) {
        self.watch_finish("set_score_for_round", |s| {
            if let Some(game) = s.schoppenvrouwen_mut("set_score_for_round") {
                game.set_score_for_round(round_index, player, score);
            }
        })
    }

    pub fn set_player_order(&mut self, player_order: Vec<PlayerId>) -> bool {
        match self {
            GameSession::BoerenBridge(game) => game.set_player_order(player_order),
            GameSession::Schoppenvrouwen(game) => game.set_player_order(player_order),
            _ => return false,
        }
        true
    }

    pub fn set_dealer_index(&mut self, dealer_index: Seat) -> bool {
        match self {
            GameSession::BoerenBridge(game) => game.set_dealer_index(dealer_index),
            GameSession::Schoppenvrouwen(game) => game.set_dealer_index(dealer_index),
            _ => false,
        }
    }

    /// Number of recorded rounds of the typed game, 0 otherwise.
    pub fn round_count(&self) -> usize {
        match self {
            GameSession::BoerenBridge(game) => game.rounds.len(),
            GameSession::Schoppenvrouwen(game) => game.rounds.len(),
            _ => 0,
        }
    }

    /// Clears the session and the mode selector.
    pub fn reset(&mut self) {
        info!(mode = ?self.mode(), "resetting game session");
        *self = GameSession::Uninitialized;
    }
}
