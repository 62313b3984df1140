//! Game configuration: win metric, thresholds, and theme pass-through.
//!
//! Settings are chosen at setup and persisted with the game. The engine
//! never interprets `theme` - it is forwarded verbatim to the track
//! provider.

use serde::{Deserialize, Serialize};

/// Which per-player quantity the win threshold is measured against.
///
/// The game can be played to "first to N correctly placed songs" or
/// "first to N tokens". Winner selection uses the same metric, with
/// tokens and then score as tiebreakers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinMetric {
    /// Timeline length (correctly placed songs) reaches the target.
    #[default]
    TimelineLength,
    /// Token balance reaches the target.
    Tokens,
}

/// Complete game settings.
///
/// Every field carries a serde default so settings saved by older builds
/// (which lacked some of them) still load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Optional category selector, forwarded to the track provider.
    #[serde(default)]
    pub theme: Option<String>,

    /// Threshold on the win metric that ends the game.
    #[serde(default = "default_target_win_count")]
    pub target_win_count: u32,

    /// Upper bound on rounds; exceeding it ends the game regardless of
    /// the win metric.
    #[serde(default = "default_max_rounds")]
    pub max_rounds: u32,

    /// Which quantity `target_win_count` applies to.
    #[serde(default)]
    pub win_metric: WinMetric,
}

fn default_target_win_count() -> u32 {
    10
}

fn default_max_rounds() -> u32 {
    20
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            theme: None,
            target_win_count: 10,
            max_rounds: 20,
            win_metric: WinMetric::default(),
        }
    }
}

impl GameSettings {
    /// Create settings with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the theme filter.
    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Set the win threshold.
    #[must_use]
    pub fn with_target_win_count(mut self, target: u32) -> Self {
        self.target_win_count = target;
        self
    }

    /// Set the round cap.
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Set the win metric.
    #[must_use]
    pub fn with_win_metric(mut self, metric: WinMetric) -> Self {
        self.win_metric = metric;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = GameSettings::default();

        assert_eq!(settings.theme, None);
        assert_eq!(settings.target_win_count, 10);
        assert_eq!(settings.max_rounds, 20);
        assert_eq!(settings.win_metric, WinMetric::TimelineLength);
    }

    #[test]
    fn test_builder() {
        let settings = GameSettings::new()
            .with_theme("90s")
            .with_target_win_count(5)
            .with_max_rounds(12)
            .with_win_metric(WinMetric::Tokens);

        assert_eq!(settings.theme.as_deref(), Some("90s"));
        assert_eq!(settings.target_win_count, 5);
        assert_eq!(settings.max_rounds, 12);
        assert_eq!(settings.win_metric, WinMetric::Tokens);
    }

    #[test]
    fn test_settings_serialization() {
        let settings = GameSettings::new().with_theme("rock");
        let json = serde_json::to_string(&settings).unwrap();
        let back: GameSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, back);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let back: GameSettings = serde_json::from_str(r#"{"theme": "rock"}"#).unwrap();

        assert_eq!(back.theme.as_deref(), Some("rock"));
        assert_eq!(back.target_win_count, 10);
        assert_eq!(back.max_rounds, 20);
        assert_eq!(back.win_metric, WinMetric::TimelineLength);
    }

    #[test]
    fn test_win_metric_wire_names() {
        assert_eq!(
            serde_json::to_string(&WinMetric::TimelineLength).unwrap(),
            "\"timeline_length\""
        );
        assert_eq!(serde_json::to_string(&WinMetric::Tokens).unwrap(), "\"tokens\"");
    }
}
