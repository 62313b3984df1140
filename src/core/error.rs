//! Error taxonomy for the rules engine.
//!
//! These are contract violations - caller misuse that must fail fast
//! without corrupting state. An incorrect placement is *not* an error; it
//! is an expected outcome with a defined effect (see
//! `rules::placement`). A provider with no tracks left is likewise a
//! recoverable empty result, not an error.

use thiserror::Error;

use super::player::PlayerId;
use super::track::TrackId;

/// Contract violations surfaced by engine operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// A placement was attempted with no candidate track pending.
    #[error("no current track to place")]
    NoCurrentTrack,

    /// The requested insertion position is outside `[0, timeline_len]`.
    #[error("position {position} out of range for timeline of length {timeline_len}")]
    PositionOutOfRange {
        position: usize,
        timeline_len: usize,
    },

    /// The candidate track already sits on the acting player's timeline.
    #[error("track {0} already placed on this timeline")]
    DuplicateTrack(TrackId),

    /// The operation requires the game to be in the `Playing` phase.
    #[error("operation requires an active game")]
    NotPlaying,

    /// Player setup requires between 2 and 4 names.
    #[error("player count must be 2-4, got {0}")]
    InvalidPlayerCount(usize),

    /// The referenced player does not exist in this game.
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),
}
