//! Scoreboard service: one load / validate / apply / save cycle per call.

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::bidding::{forbidden_bid, validate_bid, validate_tricks, validate_tricks_total};
use crate::domain::boerenbridge::BoerenBridgeGame;
use crate::domain::commands::{Command, Outcome};
use crate::domain::schoppenvrouwen::SchoppenvrouwenGame;
use crate::domain::session::{CardGame, GameMode, GameSession};
use crate::domain::snapshot::StandingsSnapshot;
use crate::domain::state::{PlayerId, Seat};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::errors::ErrorCode;
use crate::store::{SessionStore, StoredState};

/// What a call did and where the scoreboard stands afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandReport {
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<GameMode>,
    pub active: bool,
    /// Value the last Boerenbridge bidder may not choose right now.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forbidden_bid: Option<u8>,
    /// Advisory findings that did not block the command.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<StandingsSnapshot>,
}

impl CommandReport {
    fn new(outcome: Outcome, state: &StoredState, warnings: Vec<String>) -> Self {
        let active = state.session.has_active_game();
        Self {
            outcome,
            mode: state.session.mode(),
            active: active.active,
            forbidden_bid: state.session.boerenbridge().and_then(forbidden_bid),
            warnings,
            snapshot: StandingsSnapshot::build(&state.session, &state.roster),
        }
    }

    /// Pretty JSON for stdout. Encoding failures are internal, not storage, errors.
    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string_pretty(self)
            .map_err(|err| AppError::internal(format!("cannot encode report: {err}")))
    }
}

/// Scoreboard operations over a [`SessionStore`].
pub struct ScoreboardService<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> ScoreboardService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn status(&self) -> Result<CommandReport, AppError> {
        let state = self.store.load()?;
        Ok(CommandReport::new(Outcome::Ignored, &state, Vec::new()))
    }

    pub fn select_mode(&self, mode: GameMode) -> Result<CommandReport, AppError> {
        self.run(|state| Ok((state.session.apply(Command::SelectMode { mode })?, Vec::new())))
    }

    pub fn start(
        &self,
        game: CardGame,
        player_order: Vec<PlayerId>,
        dealer_index: Seat,
    ) -> Result<CommandReport, AppError> {
        validate_seating(&player_order, dealer_index)?;
        let command = match game {
            CardGame::BoerenBridge => Command::StartBoerenBridge {
                player_order,
                dealer_index,
            },
            CardGame::Schoppenvrouwen => Command::StartSchoppenvrouwen {
                player_order,
                dealer_index,
            },
        };
        self.run(|state| Ok((state.session.apply(command)?, Vec::new())))
    }

    /// Records a bid after checking it. `force` only lifts the forbidden-value rule.
    pub fn bid(&self, player: PlayerId, bid: u8, force: bool) -> Result<CommandReport, AppError> {
        self.run(|state| {
            let game = require_boerenbridge(&state.session)?;
            let mut warnings = Vec::new();
            match validate_bid(game, player, bid) {
                Ok(()) => {}
                Err(err) if force && err.validation_kind() == Some(ValidationKind::ForbiddenBid) => {
                    warn!(player, bid, "forbidden bid recorded on request");
                    warnings.push(err.to_string());
                }
                Err(err) => return Err(err.into()),
            }
            Ok((state.session.apply(Command::RecordBid { player, bid })?, warnings))
        })
    }

    /// Records tricks; a round whose trick counts miss the hand size is kept
    /// but reported as a warning.
    pub fn tricks(&self, player: PlayerId, tricks: u8) -> Result<CommandReport, AppError> {
        self.run(|state| {
            validate_tricks(require_boerenbridge(&state.session)?, player, tricks)?;
            let outcome = state.session.apply(Command::RecordTricks { player, tricks })?;
            Ok((outcome, tricks_warnings(&state.session)))
        })
    }

    /// Schoppenvrouwen: delta for the current round. Generic: points for
    /// `round` (0-based), defaulting to the player's next unscored round.
    pub fn score(
        &self,
        player: PlayerId,
        score: i64,
        round: Option<usize>,
    ) -> Result<CommandReport, AppError> {
        self.run(|state| {
            if state.session == GameSession::Generic {
                let round = round.unwrap_or_else(|| {
                    state.roster.get(player).map_or(0, |p| p.scores.len())
                });
                if !state.roster.add_score_for_round(player, round, score) {
                    return Err(unknown_player(player).into());
                }
                debug!(player, round, score, "generic score recorded");
                return Ok((Outcome::Applied, Vec::new()));
            }
            let game = require_schoppenvrouwen(&state.session)?;
            require_seated(&game.seating.player_order, player)?;
            let command = match round {
                Some(round_index) => Command::SetScoreForRound {
                    round_index,
                    player,
                    score,
                },
                None => Command::RecordScore { player, score },
            };
            Ok((state.session.apply(command)?, Vec::new()))
        })
    }

    pub fn advance(&self) -> Result<CommandReport, AppError> {
        self.run(|state| {
            let mut warnings = Vec::new();
            if let Some(game) = state.session.boerenbridge() {
                if !game.is_round_complete(game.current_round_index) {
                    warnings.push(format!(
                        "Round {} advanced with missing entries",
                        game.current_round_index + 1
                    ));
                }
            }
            let outcome = state.session.apply(Command::AdvanceRound)?;
            if outcome == Outcome::Ignored {
                warnings.clear();
            }
            Ok((outcome, warnings))
        })
    }

    /// Corrects a bid in a recorded round (0-based).
    pub fn edit_bid(
        &self,
        round_index: usize,
        player: PlayerId,
        bid: u8,
    ) -> Result<CommandReport, AppError> {
        self.run(|state| {
            let game = require_boerenbridge(&state.session)?;
            require_seated(&game.seating.player_order, player)?;
            if let Some(round) = game.rounds.get(round_index) {
                if bid > round.cards {
                    return Err(AppError::invalid(
                        ErrorCode::InvalidBid,
                        format!("Bid {bid} is outside 0..={}", round.cards),
                    ));
                }
            }
            let outcome = state.session.apply(Command::SetBidForRound {
                round_index,
                player,
                bid,
            })?;
            Ok((outcome, Vec::new()))
        })
    }

    /// Corrects a trick count in a recorded round (0-based).
    pub fn edit_tricks(
        &self,
        round_index: usize,
        player: PlayerId,
        tricks: u8,
    ) -> Result<CommandReport, AppError> {
        self.run(|state| {
            let game = require_boerenbridge(&state.session)?;
            require_seated(&game.seating.player_order, player)?;
            if let Some(round) = game.rounds.get(round_index) {
                if tricks > round.cards {
                    return Err(AppError::invalid(
                        ErrorCode::InvalidTricks,
                        format!("Tricks {tricks} is outside 0..={}", round.cards),
                    ));
                }
            }
            let outcome = state.session.apply(Command::SetTricksForRound {
                round_index,
                player,
                tricks,
            })?;
            let mut warnings = Vec::new();
            if let Some(round) = state
                .session
                .boerenbridge()
                .and_then(|g| g.rounds.get(round_index))
            {
                if let Err(err) = validate_tricks_total(round) {
                    warnings.push(err.to_string());
                }
            }
            Ok((outcome, warnings))
        })
    }

    pub fn set_dealer(&self, dealer_index: Seat) -> Result<CommandReport, AppError> {
        self.run(|state| {
            let outcome = state.session.apply(Command::SetDealerIndex { dealer_index })?;
            if outcome == Outcome::Ignored && state.session.round_count() > 0 {
                return Err(AppError::invalid(
                    ErrorCode::ValidationError,
                    format!("Dealer index {dealer_index} is not a seat"),
                ));
            }
            Ok((outcome, Vec::new()))
        })
    }

    pub fn set_order(&self, player_order: Vec<PlayerId>) -> Result<CommandReport, AppError> {
        validate_seating(&player_order, 0)?;
        self.run(|state| {
            Ok((
                state.session.apply(Command::SetPlayerOrder { player_order })?,
                Vec::new(),
            ))
        })
    }

    /// Renames or adds a roster player; a blank name removes them.
    pub fn set_player_name(&self, player: PlayerId, name: &str) -> Result<CommandReport, AppError> {
        self.run(|state| {
            state.roster.set_player_name(player, name);
            Ok((Outcome::Applied, Vec::new()))
        })
    }

    pub fn set_player_gender(
        &self,
        player: PlayerId,
        gender: Option<String>,
    ) -> Result<CommandReport, AppError> {
        self.run(|state| {
            if state.roster.get(player).is_none() {
                return Err(unknown_player(player).into());
            }
            state.roster.set_player_gender(player, gender);
            Ok((Outcome::Applied, Vec::new()))
        })
    }

    pub fn remove_player(&self, player: PlayerId) -> Result<CommandReport, AppError> {
        self.run(|state| {
            let outcome = Outcome::from(state.roster.remove_player(player).is_some());
            Ok((outcome, Vec::new()))
        })
    }

    /// Clears the session. Leaving generic mode also drops its roster scores.
    pub fn reset(&self) -> Result<CommandReport, AppError> {
        self.run(|state| {
            if state.session.mode() == Some(GameMode::Generic) {
                state.roster.reset_scores();
            }
            Ok((state.session.apply(Command::Reset)?, Vec::new()))
        })
    }

    fn run<F>(&self, op: F) -> Result<CommandReport, AppError>
    where
        F: FnOnce(&mut StoredState) -> Result<(Outcome, Vec<String>), AppError>,
    {
        let mut state = self.store.load()?;
        let (outcome, warnings) = op(&mut state)?;
        if outcome == Outcome::Applied {
            self.store.save(&state)?;
        } else {
            debug!(mode = ?state.session.mode(), "command ignored; state not saved");
        }
        Ok(CommandReport::new(outcome, &state, warnings))
    }
}

fn require_boerenbridge(session: &GameSession) -> Result<&BoerenBridgeGame, DomainError> {
    session.boerenbridge().ok_or_else(|| {
        DomainError::validation(
            ValidationKind::NoActiveGame,
            "No Boerenbridge game has been started",
        )
    })
}

fn require_schoppenvrouwen(session: &GameSession) -> Result<&SchoppenvrouwenGame, DomainError> {
    session.schoppenvrouwen().ok_or_else(|| {
        DomainError::validation(
            ValidationKind::NoActiveGame,
            "No Schoppenvrouwen or generic game is running",
        )
    })
}

fn require_seated(order: &[PlayerId], player: PlayerId) -> Result<(), DomainError> {
    if order.contains(&player) {
        Ok(())
    } else {
        Err(unknown_player(player))
    }
}

fn unknown_player(player: PlayerId) -> DomainError {
    DomainError::validation(
        ValidationKind::UnknownPlayer,
        format!("Player {player} is not part of this game"),
    )
}

/// Seating must be non-empty, without duplicates, with the dealer on a seat.
fn validate_seating(order: &[PlayerId], dealer_index: Seat) -> Result<(), AppError> {
    if order.is_empty() {
        return Err(AppError::invalid(
            ErrorCode::ValidationError,
            "At least one player is required",
        ));
    }
    let mut seen = order.to_vec();
    seen.sort_unstable();
    seen.dedup();
    if seen.len() != order.len() {
        return Err(AppError::invalid(
            ErrorCode::ValidationError,
            "Player order contains duplicates",
        ));
    }
    if dealer_index >= order.len() {
        return Err(AppError::invalid(
            ErrorCode::ValidationError,
            format!("Dealer index {dealer_index} is not a seat"),
        ));
    }
    Ok(())
}

fn tricks_warnings(session: &GameSession) -> Vec<String> {
    session
        .boerenbridge()
        .and_then(BoerenBridgeGame::current_round)
        .and_then(|round| validate_tricks_total(round).err())
        .map(|err| vec![err.to_string()])
        .unwrap_or_default()
}
