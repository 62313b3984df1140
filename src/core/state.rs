//! Aggregate game state.
//!
//! ## GameState
//!
//! The single consistent state object the engines mutate:
//! - Players in turn order
//! - Current player index and round counter
//! - The candidate track awaiting placement, if any
//! - Phase and settings
//!
//! State is owned by a `GameSession`; the rules modules mutate it through
//! explicit operations and nothing else. Everything but the pending
//! candidate is persisted (see `session::snapshot`).

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::player::{Player, PlayerId};
use super::settings::GameSettings;
use super::track::PlacedTrack;

/// Game lifecycle phase.
///
/// One-way within a game: `Setup -> Playing -> Finished`. Returning to
/// `Setup` is a full reset, not a transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Setup,
    Playing,
    Finished,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Players in turn order.
    pub players: Vec<Player>,

    /// Index of the acting player, in `[0, players.len())`.
    pub current_player_index: usize,

    /// Candidate track awaiting placement, if one has been fetched.
    pub current_track: Option<PlacedTrack>,

    /// Round counter, starts at 1, bumps each time turn order wraps.
    pub round: u32,

    /// Lifecycle phase.
    pub phase: Phase,

    /// Game settings.
    pub settings: GameSettings,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameSettings::default())
    }
}

impl GameState {
    /// Create an empty state in `Setup` with the given settings.
    #[must_use]
    pub fn new(settings: GameSettings) -> Self {
        Self {
            players: Vec::new(),
            current_player_index: 0,
            current_track: None,
            round: 1,
            phase: Phase::Setup,
            settings,
        }
    }

    /// Number of players at the table.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The acting player, if the game has players.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    /// Mutable access to the acting player.
    pub fn current_player_mut(&mut self) -> Option<&mut Player> {
        self.players.get_mut(self.current_player_index)
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Mutable lookup by id.
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Check the `Playing` phase precondition shared by turn-scoped
    /// operations.
    pub fn require_playing(&self) -> Result<(), GameError> {
        if self.phase == Phase::Playing {
            Ok(())
        } else {
            Err(GameError::NotPlaying)
        }
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Replace the roster with fresh players and start the game.
    ///
    /// Requires 2-4 names. On error the state is untouched. Used both for
    /// initial setup and "play again" flows.
    pub fn initialize_players<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), GameError> {
        if !(2..=4).contains(&names.len()) {
            return Err(GameError::InvalidPlayerCount(names.len()));
        }

        self.players = names
            .iter()
            .enumerate()
            .map(|(i, name)| Player::new(PlayerId::new(i as u8), name.as_ref()))
            .collect();
        self.current_player_index = 0;
        self.current_track = None;
        self.round = 1;
        self.phase = Phase::Playing;

        Ok(())
    }

    /// Clear everything back to `Setup` defaults, keeping nothing.
    pub fn reset(&mut self) {
        *self = Self::new(GameSettings::default());
    }
}
