//! Game session: the UI-facing aggregate.
//!
//! A `GameSession` owns one game's state plus its two collaborators - a
//! `TrackProvider` to source candidates and a `SnapshotStore` for
//! persistence. It is an explicit, constructed object: the host creates
//! it, keeps it for the session, and may run several independently (there
//! is no global state).
//!
//! Every mutating operation persists a fresh snapshot, so a game survives
//! a process restart via `load()`.
//!
//! ## Staleness
//!
//! Provider calls are the one asynchronous boundary in the host. Callers
//! should tag an in-flight fetch with `generation()` and discard the
//! result if the generation has moved on - `reset_game` bumps it.

pub mod snapshot;

use tracing::{debug, info};

use crate::core::{
    GameError, GameRng, GameSettings, GameState, PlacedTrack, Player, PlayerId, TrackId,
};
use crate::provider::TrackProvider;
use crate::rules::{self, Ability, GameOutcome, Placement};

pub use snapshot::{MemoryStore, Snapshot, SnapshotStore, SNAPSHOT_VERSION};

/// Store key for the session snapshot.
const SNAPSHOT_KEY: &str = "trackline-game-state";

/// How many tracks to request from the provider per fetch, and the larger
/// retry when everything in the first batch is already on a timeline.
const FETCH_LIMIT: usize = 50;
const RETRY_FETCH_LIMIT: usize = 100;

/// One game session.
pub struct GameSession<P, S> {
    state: GameState,
    provider: P,
    store: S,
    rng: GameRng,
    generation: u64,
}

impl<P: TrackProvider, S: SnapshotStore> GameSession<P, S> {
    /// Create a session with default settings and an entropy-seeded RNG.
    #[must_use]
    pub fn new(provider: P, store: S) -> Self {
        Self::with_settings(provider, store, GameSettings::default())
    }

    /// Create a session with explicit settings.
    #[must_use]
    pub fn with_settings(provider: P, store: S, settings: GameSettings) -> Self {
        Self {
            state: GameState::new(settings),
            provider,
            store,
            rng: GameRng::from_entropy(),
            generation: 0,
        }
    }

    /// Reseed the RNG, making track selection deterministic. Intended for
    /// tests and replays.
    pub fn seed_rng(&mut self, seed: u64) {
        self.rng = GameRng::new(seed);
    }

    // === Setup ===

    /// Create the roster (2-4 names) and start the game.
    ///
    /// On success the phase is `Playing`, the round is 1, and the first
    /// player acts. On error the state is untouched.
    pub fn initialize_players<N: AsRef<str>>(&mut self, names: &[N]) -> Result<(), GameError> {
        self.state.initialize_players(names)?;
        info!(players = names.len(), "game started");
        self.persist();
        Ok(())
    }

    /// Replace the game settings.
    pub fn update_settings(&mut self, settings: GameSettings) {
        self.state.settings = settings;
        self.persist();
    }

    // === Turn flow ===

    /// Fetch the next candidate track from the provider.
    ///
    /// Excludes every id already placed on any timeline in the game, picks
    /// uniformly from the rest, and retries once with a larger batch when
    /// the first batch is exhausted. Returns `None` - leaving any existing
    /// candidate in place - when the provider has nothing unused left;
    /// the UI decides how to recover (retry, change theme).
    pub fn request_next_track(&mut self) -> Option<&PlacedTrack> {
        if self.state.require_playing().is_err() {
            return None;
        }

        let used: Vec<TrackId> = self
            .state
            .players
            .iter()
            .flat_map(|p| p.timeline.iter().map(|t| t.id.clone()))
            .collect();

        let theme = self.state.settings.theme.clone();
        let mut candidates = self.fetch_unused(theme.as_deref(), FETCH_LIMIT, &used);
        if candidates.is_empty() {
            candidates = self.fetch_unused(theme.as_deref(), RETRY_FETCH_LIMIT, &used);
        }

        let choice = self.rng.choose(&candidates)?.clone();
        debug!(track = %choice.id, year = choice.year, "candidate track drawn");
        self.state.current_track = Some(choice.into_placed());
        self.state.current_track.as_ref()
    }

    fn fetch_unused(
        &mut self,
        theme: Option<&str>,
        limit: usize,
        used: &[TrackId],
    ) -> Vec<crate::core::Track> {
        self.provider
            .get_tracks(theme, limit)
            .into_iter()
            .filter(|t| !used.contains(&t.id))
            .collect()
    }

    /// Place the pending candidate at `position` on the acting player's
    /// timeline. See [`rules::place`] for the outcome semantics.
    pub fn place(&mut self, position: usize) -> Result<Placement, GameError> {
        let result = rules::place(&mut self.state, position)?;
        self.persist();
        Ok(result)
    }

    /// Spend one of `player`'s tokens on an ability. Returns false without
    /// mutation when the player is unknown or has no tokens.
    pub fn use_token(&mut self, player: PlayerId, ability: Ability) -> bool {
        let spent = rules::use_token(&mut self.state, player, ability);
        if spent {
            self.persist();
        }
        spent
    }

    /// Advance to the next player and re-evaluate termination.
    pub fn advance_turn(&mut self) -> Result<(), GameError> {
        rules::advance_turn(&mut self.state)?;
        self.persist();
        Ok(())
    }

    /// Discard the game entirely: state back to `Setup` defaults, stored
    /// snapshot erased, generation bumped so stale provider results are
    /// recognizable.
    pub fn reset_game(&mut self) {
        self.state.reset();
        self.store.delete(SNAPSHOT_KEY);
        self.generation += 1;
        info!(generation = self.generation, "game reset");
    }

    // === Persistence ===

    /// Persist the current snapshot.
    pub fn save(&mut self) {
        self.persist();
    }

    /// Restore the session from the stored snapshot.
    ///
    /// Returns false - leaving the current state untouched - when no
    /// snapshot exists or the blob is unreadable; the caller continues
    /// with fresh state.
    pub fn load(&mut self) -> bool {
        let Some(blob) = self.store.get(SNAPSHOT_KEY) else {
            return false;
        };
        match snapshot::restore_blob(&blob) {
            Some(state) => {
                info!(round = state.round, players = state.player_count(), "game restored");
                self.state = state;
                true
            }
            None => false,
        }
    }

    fn persist(&mut self) {
        match serde_json::to_vec(&snapshot::capture(&self.state)) {
            Ok(blob) => self.store.put(SNAPSHOT_KEY, &blob),
            Err(err) => tracing::error!(%err, "failed to serialize game snapshot"),
        }
    }

    // === Read access ===

    /// The full game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The acting player.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.state.current_player()
    }

    /// The candidate track awaiting placement.
    #[must_use]
    pub fn current_track(&self) -> Option<&PlacedTrack> {
        self.state.current_track.as_ref()
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// The winner (or explicit tie) of a finished game.
    #[must_use]
    pub fn winner(&self) -> Option<GameOutcome> {
        rules::winner(&self.state)
    }

    /// Session generation, bumped on every reset. Tag in-flight provider
    /// requests with this and drop results whose generation is stale.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
