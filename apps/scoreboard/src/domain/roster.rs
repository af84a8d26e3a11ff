//! Player roster and the free-form ("generic") scorekeeping it carries.
//!
//! Names and gender feed the commentary snapshot only; scoring never reads them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::state::{saturating_total, PlayerId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Generic-mode points keyed by 0-based round number.
    #[serde(default)]
    pub scores: BTreeMap<usize, i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    players: BTreeMap<PlayerId, Player>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn name(&self, id: PlayerId) -> Option<&str> {
        self.players.get(&id).map(|p| p.name.as_str())
    }

    pub fn ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// A blank name removes the player; otherwise inserts or renames, keeping scores.
    pub fn set_player_name(&mut self, id: PlayerId, name: &str) {
        if name.trim().is_empty() {
            self.players.remove(&id);
            return;
        }
        self.players.entry(id).or_default().name = name.to_string();
    }

    /// Gender tag for commentary; ignored for unknown ids.
    pub fn set_player_gender(&mut self, id: PlayerId, gender: Option<String>) {
        if let Some(player) = self.players.get_mut(&id) {
            player.gender = gender;
        }
    }

    pub fn remove_player(&mut self, id: PlayerId) -> Option<Player> {
        self.players.remove(&id)
    }

    /// Writes or overwrites a generic-mode score; ignored for unknown ids.
    pub fn add_score_for_round(&mut self, id: PlayerId, round: usize, score: i64) -> bool {
        match self.players.get_mut(&id) {
            Some(player) => {
                player.scores.insert(round, score);
                true
            }
            None => false,
        }
    }

    pub fn total_score(&self, id: PlayerId) -> i64 {
        self.players
            .get(&id)
            .map_or(0, |p| saturating_total(p.scores.values().copied()))
    }

    /// Largest number of recorded rounds across players.
    pub fn number_of_rounds(&self) -> usize {
        self.players
            .values()
            .map(|p| p.scores.len())
            .max()
            .unwrap_or(0)
    }

    /// Ids with totals, highest total first (ties keep id order).
    pub fn players_by_score(&self) -> Vec<(PlayerId, i64)> {
        let mut ranked: Vec<_> = self.ids().map(|id| (id, self.total_score(id))).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Keeps the players, drops every generic-mode score.
    pub fn reset_scores(&mut self) {
        for player in self.players.values_mut() {
            player.scores.clear();
        }
    }
}
