//! Track sourcing: the provider seam and an in-memory catalog.
//!
//! ## TrackProvider
//!
//! The engine's only external collaborator. How tracks are sourced (web
//! API, static catalog, cache) is irrelevant as long as ids are stable and
//! years are integers. An empty result means the provider has nothing left
//! for the theme - a recoverable condition, not an error.
//!
//! ## StaticCatalog
//!
//! A registry-backed provider for tests and offline play. Tracks can be
//! tagged with themes; an untagged track matches every theme.

use rustc_hash::FxHashMap;

use crate::core::{Track, TrackId};

/// Source of candidate tracks.
pub trait TrackProvider {
    /// Fetch up to `limit` tracks matching the theme (all themes when
    /// `None`). Returns fewer - possibly none - when the source runs dry.
    fn get_tracks(&mut self, theme: Option<&str>, limit: usize) -> Vec<Track>;
}

/// In-memory track catalog.
///
/// ## Example
///
/// ```
/// use trackline::provider::{StaticCatalog, TrackProvider};
/// use trackline::core::Track;
///
/// let mut catalog = StaticCatalog::new();
/// catalog.register(Track::new("t1", "Billie Jean", "Michael Jackson", 1983));
/// catalog.register_themed(Track::new("t2", "Wonderwall", "Oasis", 1995), "90s");
///
/// assert_eq!(catalog.get_tracks(None, 10).len(), 2);
/// assert_eq!(catalog.get_tracks(Some("90s"), 10).len(), 2);
/// assert_eq!(catalog.get_tracks(Some("disco"), 10).len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    entries: Vec<CatalogEntry>,
    by_id: FxHashMap<TrackId, usize>,
}

#[derive(Clone, Debug)]
struct CatalogEntry {
    track: Track,
    /// Theme tag; `None` matches every theme.
    theme: Option<String>,
}

impl StaticCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an untagged track.
    ///
    /// Panics if a track with the same ID already exists.
    pub fn register(&mut self, track: Track) {
        self.insert(track, None);
    }

    /// Register a track under a theme.
    ///
    /// Panics if a track with the same ID already exists.
    pub fn register_themed(&mut self, track: Track, theme: impl Into<String>) {
        self.insert(track, Some(theme.into()));
    }

    fn insert(&mut self, track: Track, theme: Option<String>) {
        if self.by_id.contains_key(&track.id) {
            panic!("Track with ID {} already registered", track.id);
        }
        self.by_id.insert(track.id.clone(), self.entries.len());
        self.entries.push(CatalogEntry { track, theme });
    }

    /// Get a track by ID.
    #[must_use]
    pub fn get(&self, id: &TrackId) -> Option<&Track> {
        self.by_id.get(id).map(|&i| &self.entries[i].track)
    }

    /// Number of registered tracks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all tracks.
    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.entries.iter().map(|e| &e.track)
    }
}

impl TrackProvider for StaticCatalog {
    fn get_tracks(&mut self, theme: Option<&str>, limit: usize) -> Vec<Track> {
        self.entries
            .iter()
            .filter(|e| match (theme, &e.theme) {
                (Some(wanted), Some(tag)) => wanted == tag,
                // Untagged tracks match any theme; no theme matches all.
                _ => true,
            })
            .map(|e| e.track.clone())
            .take(limit)
            .collect()
    }
}
