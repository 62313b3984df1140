//! Track records: what the provider supplies and what timelines hold.
//!
//! ## Track
//!
//! The record a `TrackProvider` returns: id, title, artist, release year,
//! and an opaque artwork reference. The engine only interprets `id` and
//! `year`; everything else passes through to the presentation layer.
//!
//! ## PlacedTrack
//!
//! A track bound into a timeline. Carries `revealed`, which flips to true
//! once the track has been correctly committed - downstream consumers use
//! it to decide whether artwork may be shown.

use serde::{Deserialize, Serialize};

/// Provider-supplied unique track identifier.
///
/// Opaque to the engine; only compared for equality. Stable ids are the
/// provider's contract.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackId(pub String);

impl TrackId {
    /// Create a new track ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A candidate track as returned by a provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Provider-stable unique id.
    pub id: TrackId,

    /// Display title.
    pub title: String,

    /// Display artist.
    pub artist: String,

    /// Release year - the ground truth for ordering and correctness.
    pub year: i32,

    /// Opaque artwork reference (URL or cache key), uninterpreted here.
    pub artwork_ref: Option<String>,
}

impl Track {
    /// Create a track with no artwork reference.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            id: TrackId::new(id),
            title: title.into(),
            artist: artist.into(),
            year,
            artwork_ref: None,
        }
    }

    /// Attach an artwork reference.
    #[must_use]
    pub fn with_artwork(mut self, artwork_ref: impl Into<String>) -> Self {
        self.artwork_ref = Some(artwork_ref.into());
        self
    }

    /// Bind this track for placement. Starts unrevealed.
    #[must_use]
    pub fn into_placed(self) -> PlacedTrack {
        PlacedTrack {
            id: self.id,
            title: self.title,
            artist: self.artist,
            year: self.year,
            artwork_ref: self.artwork_ref,
            revealed: false,
        }
    }
}

/// A track bound into a timeline (or pending placement as the current
/// candidate).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedTrack {
    /// Provider-stable unique id.
    pub id: TrackId,

    /// Display title.
    pub title: String,

    /// Display artist.
    pub artist: String,

    /// Release year.
    pub year: i32,

    /// Opaque artwork reference.
    #[serde(default)]
    pub artwork_ref: Option<String>,

    /// True once the track has been correctly committed to a timeline.
    #[serde(default)]
    pub revealed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_id() {
        let id = TrackId::new("spotify:4uLU6hMC");
        assert_eq!(id.as_str(), "spotify:4uLU6hMC");
        assert_eq!(format!("{}", id), "spotify:4uLU6hMC");
    }

    #[test]
    fn test_track_builder() {
        let track = Track::new("t1", "Smells Like Teen Spirit", "Nirvana", 1991)
            .with_artwork("https://img/nevermind.jpg");

        assert_eq!(track.year, 1991);
        assert_eq!(track.artwork_ref.as_deref(), Some("https://img/nevermind.jpg"));
    }

    #[test]
    fn test_into_placed_starts_unrevealed() {
        let placed = Track::new("t1", "Song", "Artist", 1984).into_placed();

        assert!(!placed.revealed);
        assert_eq!(placed.id, TrackId::new("t1"));
        assert_eq!(placed.year, 1984);
    }

    #[test]
    fn test_placed_track_serialization() {
        let placed = Track::new("t1", "Song", "Artist", 1984)
            .with_artwork("ref")
            .into_placed();

        let json = serde_json::to_string(&placed).unwrap();
        let back: PlacedTrack = serde_json::from_str(&json).unwrap();
        assert_eq!(placed, back);
    }
}
