//! Player identification and per-player game data.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Players are addressed by their position in
//! turn order (0-based), which is stable for the life of a game.
//!
//! ## Player
//!
//! The per-player record: display name, score, token balance, and the
//! personal timeline of committed tracks.

use serde::{Deserialize, Serialize};

use super::track::PlacedTrack;

/// Player identifier supporting up to 255 players.
///
/// The rules only ever admit 2-4 players per game; the identifier is
/// deliberately the same shape for any table size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based, equals turn-order position).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player-{}", self.0)
    }
}

/// A player at the table.
///
/// `score` exists for statistics and tiebreaks only; the main currency is
/// `tokens`, earned by correct placements and milestone bonuses and spent
/// on abilities. `timeline` is the player's personal chronological sequence
/// of committed tracks, sorted ascending by year whenever no placement is
/// in flight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Turn-order identifier.
    pub id: PlayerId,

    /// Display name. Length limits are the setup screen's concern.
    pub name: String,

    /// Points for statistics/tiebreak, never negative.
    #[serde(default)]
    pub score: u32,

    /// Token balance, never negative, no upper bound.
    #[serde(default)]
    pub tokens: u32,

    /// Committed tracks in chronological order.
    #[serde(default)]
    pub timeline: Vec<PlacedTrack>,
}

impl Player {
    /// Create a fresh player with empty timeline and zeroed counters.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            tokens: 0,
            timeline: Vec::new(),
        }
    }

    /// Number of tracks committed to this player's timeline.
    #[must_use]
    pub fn timeline_len(&self) -> usize {
        self.timeline.len()
    }

    /// Check whether a track id is already on this player's timeline.
    #[must_use]
    pub fn has_track(&self, track_id: &super::track::TrackId) -> bool {
        self.timeline.iter().any(|t| &t.id == track_id)
    }
}
