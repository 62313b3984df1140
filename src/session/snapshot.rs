//! Versioned game snapshots and the blob-store seam.
//!
//! The persisted record carries players, turn position, phase, round, and
//! settings - never the pending candidate track, which is transient and
//! refetched after resume. The saved format has changed across versions of
//! this game, so restoring is defensive: missing fields take defaults,
//! out-of-range values are repaired, and an unreadable blob simply reports
//! failure so the caller can fall back to a fresh game.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{GameSettings, GameState, Phase, Player};

/// Current snapshot schema version.
pub const SNAPSHOT_VERSION: u32 = 1;

fn default_round() -> u32 {
    1
}

/// The persisted game record.
///
/// Every field defaults so that blobs written by older versions of the
/// game (or partially corrupted ones) still restore to something sane.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Schema version; absent in pre-versioned blobs.
    #[serde(default)]
    pub version: u32,

    #[serde(default)]
    pub players: Vec<Player>,

    #[serde(default)]
    pub current_player_index: usize,

    #[serde(default)]
    pub phase: Phase,

    #[serde(default = "default_round")]
    pub round: u32,

    #[serde(default)]
    pub settings: GameSettings,
}

/// Capture the persisted fields of a game state.
#[must_use]
pub fn capture(state: &GameState) -> Snapshot {
    Snapshot {
        version: SNAPSHOT_VERSION,
        players: state.players.clone(),
        current_player_index: state.current_player_index,
        phase: state.phase,
        round: state.round,
        settings: state.settings.clone(),
    }
}

/// Migrate and validate a snapshot into a game state.
///
/// Repairs applied:
/// - player index outside the roster resets to 0
/// - round floors at 1
/// - an empty roster forces `Setup` (a started game always has players)
#[must_use]
pub fn restore(snapshot: Snapshot) -> GameState {
    let Snapshot {
        version,
        players,
        mut current_player_index,
        mut phase,
        mut round,
        settings,
    } = snapshot;

    if version < SNAPSHOT_VERSION {
        warn!(version, "restoring snapshot from older schema");
    }

    if current_player_index >= players.len() {
        current_player_index = 0;
    }
    if round == 0 {
        round = 1;
    }
    if players.is_empty() && phase != Phase::Setup {
        phase = Phase::Setup;
    }

    GameState {
        players,
        current_player_index,
        current_track: None,
        round,
        phase,
        settings,
    }
}

/// Parse a raw blob into a game state.
///
/// Returns `None` when the blob is not valid JSON for the snapshot shape;
/// individual missing fields still default.
#[must_use]
pub fn restore_blob(blob: &[u8]) -> Option<GameState> {
    match serde_json::from_slice::<Snapshot>(blob) {
        Ok(snapshot) => Some(restore(snapshot)),
        Err(err) => {
            warn!(%err, "unreadable game snapshot");
            None
        }
    }
}

/// Key-value blob store the session persists into.
///
/// The engine only needs get/put/delete of opaque byte blobs; the backing
/// mechanism (browser storage in the original, a file, a database) is the
/// host's concern.
pub trait SnapshotStore {
    /// Read the blob under `key`, if present.
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Write the blob under `key`, replacing any previous value.
    fn put(&mut self, key: &str, blob: &[u8]);

    /// Remove the blob under `key`.
    fn delete(&mut self, key: &str);
}

/// In-memory store for tests and embedding.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    blobs: FxHashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blobs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    /// Check if the store holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl SnapshotStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.blobs.get(key).cloned()
    }

    fn put(&mut self, key: &str, blob: &[u8]) {
        self.blobs.insert(key.to_string(), blob.to_vec());
    }

    fn delete(&mut self, key: &str) {
        self.blobs.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameSettings, Track};

    fn sample_state() -> GameState {
        let mut state = GameState::new(GameSettings::new().with_theme("90s"));
        state.initialize_players(&["Alice", "Bob"]).unwrap();
        state.players[0]
            .timeline
            .push(Track::new("t1", "Song", "Artist", 1991).into_placed());
        state.players[0].tokens = 2;
        state.players[0].score = 3;
        state.round = 4;
        state.current_player_index = 1;
        state
    }

    #[test]
    fn test_round_trip() {
        let state = sample_state();
        let blob = serde_json::to_vec(&capture(&state)).unwrap();
        let restored = restore_blob(&blob).unwrap();

        assert_eq!(restored, state);
    }

    #[test]
    fn test_current_track_not_persisted() {
        let mut state = sample_state();
        state.current_track = Some(Track::new("t2", "Pending", "Artist", 2001).into_placed());

        let blob = serde_json::to_vec(&capture(&state)).unwrap();
        let restored = restore_blob(&blob).unwrap();

        assert!(restored.current_track.is_none());
    }

    #[test]
    fn test_missing_fields_default() {
        // A minimal pre-versioned blob: players only.
        let restored = restore_blob(br#"{"players": []}"#).unwrap();

        assert_eq!(restored.phase, Phase::Setup);
        assert_eq!(restored.round, 1);
        assert_eq!(restored.current_player_index, 0);
        assert_eq!(restored.settings, GameSettings::default());
    }

    #[test]
    fn test_out_of_range_index_repaired() {
        let state = sample_state();
        let mut snapshot = capture(&state);
        snapshot.current_player_index = 17;

        let restored = restore(snapshot);
        assert_eq!(restored.current_player_index, 0);
    }

    #[test]
    fn test_zero_round_floors_to_one() {
        let mut snapshot = capture(&sample_state());
        snapshot.round = 0;

        assert_eq!(restore(snapshot).round, 1);
    }

    #[test]
    fn test_empty_roster_forces_setup() {
        let mut snapshot = capture(&sample_state());
        snapshot.players.clear();
        snapshot.phase = Phase::Playing;

        assert_eq!(restore(snapshot).phase, Phase::Setup);
    }

    #[test]
    fn test_unreadable_blob_reports_failure() {
        assert!(restore_blob(b"not json at all").is_none());
        assert!(restore_blob(br#"{"players": "wrong type"}"#).is_none());
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());

        store.put("k", b"abc");
        assert_eq!(store.get("k").as_deref(), Some(b"abc".as_slice()));
        assert_eq!(store.len(), 1);

        store.put("k", b"xyz");
        assert_eq!(store.get("k").as_deref(), Some(b"xyz".as_slice()));

        store.delete("k");
        assert!(store.get("k").is_none());
    }
}
