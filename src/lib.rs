//! # trackline
//!
//! Rules engine for a music timeline guessing party game: players place
//! mystery tracks onto a personal chronological timeline, earning tokens
//! for correct placements and spending them on abilities.
//!
//! ## Design Principles
//!
//! 1. **Explicit sessions**: no global state. A [`GameSession`] is a
//!    constructed object owning one game; hosts may run several at once.
//!
//! 2. **Collaborators behind traits**: track sourcing
//!    ([`provider::TrackProvider`]) and persistence
//!    ([`session::SnapshotStore`]) are seams; the engine never talks to a
//!    catalog API or a storage backend directly.
//!
//! 3. **Rule failures are outcomes, not errors**: an incorrect placement
//!    reverts cleanly and reports `success: false`. Errors are reserved
//!    for caller contract violations.
//!
//! ## Modules
//!
//! - `core`: players, tracks, settings, state, errors, RNG
//! - `timeline`: chronological ordering checks and year helpers
//! - `rules`: placement engine, token economy, turn/round control
//! - `provider`: track sourcing seam and in-memory catalog
//! - `session`: the UI-facing session aggregate with versioned save/load

pub mod core;
pub mod provider;
pub mod rules;
pub mod session;
pub mod timeline;

// Re-export commonly used types
pub use crate::core::{
    GameError, GameRng, GameSettings, GameState, Phase, PlacedTrack, Player, PlayerId, Track,
    TrackId, WinMetric,
};

pub use crate::rules::{Ability, GameOutcome, Placement};

pub use crate::provider::{StaticCatalog, TrackProvider};

pub use crate::session::{GameSession, MemoryStore, Snapshot, SnapshotStore, SNAPSHOT_VERSION};
