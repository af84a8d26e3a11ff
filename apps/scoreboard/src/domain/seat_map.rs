//! Per-player value slots for a single round.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::state::PlayerId;

/// Ordered map from player id to an optional value (bid, tricks, score delta).
///
/// A round creates one empty slot per seated player, so completion is "no
/// slot is empty" rather than a key count compared against the seating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatMap<T> {
    slots: BTreeMap<PlayerId, Option<T>>,
}

impl<T> Default for SeatMap<T> {
    fn default() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }
}

impl<T: Copy> SeatMap<T> {
    pub fn for_players(players: &[PlayerId]) -> Self {
        Self {
            slots: players.iter().map(|&p| (p, None)).collect(),
        }
    }

    pub fn get(&self, player: PlayerId) -> Option<T> {
        self.slots.get(&player).copied().flatten()
    }

    /// Writes or overwrites the value; unseated ids get a slot of their own.
    pub fn set(&mut self, player: PlayerId, value: T) {
        self.slots.insert(player, Some(value));
    }

    pub fn clear(&mut self, player: PlayerId) {
        if let Some(slot) = self.slots.get_mut(&player) {
            *slot = None;
        }
    }

    pub fn contains(&self, player: PlayerId) -> bool {
        self.get(player).is_some()
    }

    pub fn filled_count(&self) -> usize {
        self.slots.values().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.filled_count() == 0
    }

    pub fn is_complete(&self) -> bool {
        !self.slots.is_empty() && self.slots.values().all(Option::is_some)
    }

    /// Players whose slot is still empty.
    pub fn missing(&self) -> Vec<PlayerId> {
        self.slots
            .iter()
            .filter(|(_, v)| v.is_none())
            .map(|(&p, _)| p)
            .collect()
    }

    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.slots.values().filter_map(|v| *v)
    }

    pub fn filled(&self) -> impl Iterator<Item = (PlayerId, T)> + '_ {
        self.slots.iter().filter_map(|(&p, v)| v.map(|v| (p, v)))
    }

    /// Adds empty slots for seated players that have none yet.
    pub fn ensure_slots(&mut self, players: &[PlayerId]) {
        for &p in players {
            self.slots.entry(p).or_insert(None);
        }
    }

    /// Re-keys to `players`: values of kept players survive, removed players drop out.
    pub fn reseat(&mut self, players: &[PlayerId]) {
        let slots = players
            .iter()
            .map(|&p| (p, self.slots.get(&p).copied().flatten()))
            .collect();
        self.slots = slots;
    }
}
