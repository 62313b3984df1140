//! Core types: players, tracks, settings, state, errors, RNG.
//!
//! These are the building blocks the rules modules operate on. They carry
//! no game logic beyond small structural helpers.

pub mod error;
pub mod player;
pub mod rng;
pub mod settings;
pub mod state;
pub mod track;

pub use error::GameError;
pub use player::{Player, PlayerId};
pub use rng::GameRng;
pub use settings::{GameSettings, WinMetric};
pub use state::{GameState, Phase};
pub use track::{PlacedTrack, Track, TrackId};
