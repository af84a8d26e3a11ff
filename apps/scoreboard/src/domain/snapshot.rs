//! Read-only standings feed for the commentary generator and status output.

use serde::Serialize;

use crate::domain::roster::Roster;
use crate::domain::rules::{BOEREN_BRIDGE_ROUNDS, TARGET_SCORE};
use crate::domain::session::{GameMode, GameSession};
use crate::domain::state::{saturating_total, Phase, PlayerId};

/// Name used for seated ids the roster does not know.
pub const UNKNOWN_PLAYER_NAME: &str = "Onbekend";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStanding {
    pub player_id: PlayerId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    pub score: i64,
    /// Scores of the rounds this player has completed, in round order.
    pub round_scores: Vec<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsSnapshot {
    pub mode: GameMode,
    /// Players in seating order (roster order for generic).
    pub players: Vec<PlayerStanding>,
    /// 1-based.
    pub current_round: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_rounds: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dealer: Option<PlayerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<Phase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<PlayerId>,
}

impl StandingsSnapshot {
    /// Builds the snapshot, `None` while no game is set up.
    pub fn build(session: &GameSession, roster: &Roster) -> Option<Self> {
        match session {
            GameSession::Uninitialized | GameSession::AwaitingSetup(_) => None,
            GameSession::Generic => {
                let players: Vec<_> = roster
                    .ids()
                    .map(|id| {
                        let round_scores: Vec<i64> = roster
                            .get(id)
                            .map(|p| p.scores.values().copied().collect())
                            .unwrap_or_default();
                        standing(roster, id, round_scores)
                    })
                    .collect();
                let rounds = roster.number_of_rounds();
                Some(Self {
                    mode: GameMode::Generic,
                    players,
                    // an empty table still shows round 1
                    current_round: rounds.max(1),
                    total_rounds: Some(rounds),
                    target_score: None,
                    dealer: None,
                    phase: None,
                    winner: None,
                })
            }
            GameSession::BoerenBridge(game) => {
                let players = game
                    .seating
                    .player_order
                    .iter()
                    .map(|&id| {
                        let round_scores = game.round_scores(id).into_iter().map(i64::from).collect();
                        standing(roster, id, round_scores)
                    })
                    .collect();
                Some(Self {
                    mode: GameMode::BoerenBridge,
                    players,
                    current_round: game.current_round_index + 1,
                    total_rounds: Some(BOEREN_BRIDGE_ROUNDS),
                    target_score: None,
                    dealer: game.dealer(),
                    phase: Some(game.phase()),
                    winner: None,
                })
            }
            GameSession::Schoppenvrouwen(game) => {
                let players = game
                    .seating
                    .player_order
                    .iter()
                    .map(|&id| standing(roster, id, game.round_scores(id)))
                    .collect();
                Some(Self {
                    mode: GameMode::Schoppenvrouwen,
                    players,
                    current_round: game.current_round_index + 1,
                    total_rounds: None,
                    target_score: Some(TARGET_SCORE),
                    dealer: game.dealer(),
                    phase: Some(game.phase()),
                    winner: game.winner(),
                })
            }
        }
    }

    /// Highest score; ties go to the earliest listed player.
    pub fn leader(&self) -> Option<&PlayerStanding> {
        self.players.iter().fold(None, |best, p| match best {
            Some(b) if b.score >= p.score => Some(b),
            _ => Some(p),
        })
    }

    /// Running totals after each round, for narrative history.
    pub fn running_totals(&self, player_id: PlayerId) -> Vec<i64> {
        let Some(player) = self.players.iter().find(|p| p.player_id == player_id) else {
            return Vec::new();
        };
        player
            .round_scores
            .iter()
            .scan(0i64, |acc, s| {
                *acc = acc.saturating_add(*s);
                Some(*acc)
            })
            .collect()
    }
}

fn standing(roster: &Roster, id: PlayerId, round_scores: Vec<i64>) -> PlayerStanding {
    let player = roster.get(id);
    PlayerStanding {
        player_id: id,
        name: player.map_or_else(|| UNKNOWN_PLAYER_NAME.to_string(), |p| p.name.clone()),
        gender: player.and_then(|p| p.gender.clone()),
        score: saturating_total(round_scores.iter().copied()),
        round_scores,
    }
}
