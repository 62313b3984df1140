//! Turn rotation, round counting, termination, and winner selection.
//!
//! The phase machine is one-way: `Setup -> Playing -> Finished`. Once
//! `Finished`, the state stays finished until a full reset. Termination is
//! evaluated after every turn advance and immediately after scoring
//! placements (see `rules::placement`).

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{GameError, GameState, Phase, Player, PlayerId, WinMetric};

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Single winner.
    Winner(PlayerId),
    /// Full tie on metric, tokens, and score - surfaced, never resolved
    /// arbitrarily.
    Tie(Vec<PlayerId>),
}

impl GameOutcome {
    /// Check if a player won (tied players all count as winners).
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameOutcome::Winner(p) => *p == player,
            GameOutcome::Tie(ps) => ps.contains(&player),
        }
    }
}

/// The configured win-metric value for a player.
#[must_use]
pub fn metric_value(player: &Player, metric: WinMetric) -> u32 {
    match metric {
        WinMetric::TimelineLength => player.timeline.len() as u32,
        WinMetric::Tokens => player.tokens,
    }
}

/// Evaluate the termination predicate and flip the phase to `Finished`
/// when it holds. Returns whether the game is (now) finished.
///
/// The game ends when any player's win metric reaches
/// `target_win_count`, or the round counter exceeds `max_rounds`.
/// A finished game stays finished.
pub fn check_termination(state: &mut GameState) -> bool {
    match state.phase {
        Phase::Finished => return true,
        Phase::Setup => return false,
        Phase::Playing => {}
    }

    let settings = &state.settings;
    let target_reached = state
        .players
        .iter()
        .any(|p| metric_value(p, settings.win_metric) >= settings.target_win_count);
    let rounds_exhausted = state.round > settings.max_rounds;

    if target_reached || rounds_exhausted {
        state.phase = Phase::Finished;
        info!(
            round = state.round,
            target_reached, rounds_exhausted, "game finished"
        );
    }

    state.is_finished()
}

/// Advance to the next player.
///
/// Rotates the player index, clears the pending candidate, bumps the
/// round counter when turn order wraps back to the first player, and then
/// evaluates termination. A no-op on an already finished game.
///
/// ## Errors
///
/// [`GameError::NotPlaying`] if the game has not started.
pub fn advance_turn(state: &mut GameState) -> Result<(), GameError> {
    if state.is_finished() {
        return Ok(());
    }
    state.require_playing()?;

    state.current_player_index = (state.current_player_index + 1) % state.players.len();
    state.current_track = None;

    if state.current_player_index == 0 {
        state.round += 1;
        debug!(round = state.round, "round advanced");
    }

    check_termination(state);
    Ok(())
}

/// Pick the winner of a finished game.
///
/// Maximizes the configured win metric; ties break by token count, then
/// score. A residual tie is returned as [`GameOutcome::Tie`]. Returns
/// `None` unless the game is finished.
#[must_use]
pub fn winner(state: &GameState) -> Option<GameOutcome> {
    if !state.is_finished() || state.players.is_empty() {
        return None;
    }

    let metric = state.settings.win_metric;
    let key = |p: &Player| (metric_value(p, metric), p.tokens, p.score);

    let best = state.players.iter().map(&key).max()?;
    let leaders: Vec<PlayerId> = state
        .players
        .iter()
        .filter(|&p| key(p) == best)
        .map(|p| p.id)
        .collect();

    match leaders.as_slice() {
        [single] => Some(GameOutcome::Winner(*single)),
        _ => Some(GameOutcome::Tie(leaders)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameSettings, Track};

    fn playing_state(settings: GameSettings) -> GameState {
        let mut state = GameState::new(settings);
        state.initialize_players(&["Alice", "Bob", "Cleo"]).unwrap();
        state
    }

    fn give_timeline(state: &mut GameState, player: usize, count: usize) {
        for i in 0..count {
            state.players[player].timeline.push(
                Track::new(format!("p{player}t{i}"), "Song", "Artist", 1950 + i as i32)
                    .into_placed(),
            );
        }
    }

    #[test]
    fn test_advance_rotates_and_wraps() {
        let mut state = playing_state(GameSettings::default());
        state.current_track = Some(Track::new("t", "Song", "Artist", 1990).into_placed());

        advance_turn(&mut state).unwrap();
        assert_eq!(state.current_player_index, 1);
        assert!(state.current_track.is_none());
        assert_eq!(state.round, 1);

        advance_turn(&mut state).unwrap();
        assert_eq!(state.current_player_index, 2);

        advance_turn(&mut state).unwrap();
        assert_eq!(state.current_player_index, 0);
        assert_eq!(state.round, 2);
    }

    #[test]
    fn test_advance_requires_started_game() {
        let mut state = GameState::default();
        assert_eq!(advance_turn(&mut state), Err(GameError::NotPlaying));
    }

    #[test]
    fn test_round_cap_termination() {
        let mut state = playing_state(GameSettings::new().with_max_rounds(2));

        // Three full rotations: round becomes 3 > 2 on the last wrap.
        for _ in 0..9 {
            advance_turn(&mut state).unwrap();
            if state.is_finished() {
                break;
            }
        }

        assert!(state.is_finished());
        assert_eq!(state.round, 3);
    }

    #[test]
    fn test_target_termination_on_advance() {
        let mut state = playing_state(GameSettings::new().with_target_win_count(2));
        give_timeline(&mut state, 1, 2);

        assert!(!state.is_finished());
        advance_turn(&mut state).unwrap();
        assert!(state.is_finished());
    }

    #[test]
    fn test_tokens_metric_termination() {
        let mut state = playing_state(
            GameSettings::new()
                .with_target_win_count(3)
                .with_win_metric(WinMetric::Tokens),
        );
        state.players[2].tokens = 3;

        assert!(check_termination(&mut state));
        assert!(state.is_finished());
    }

    #[test]
    fn test_finished_is_sticky() {
        let mut state = playing_state(GameSettings::new().with_target_win_count(1));
        give_timeline(&mut state, 0, 1);
        check_termination(&mut state);
        assert!(state.is_finished());

        // Advancing a finished game changes nothing.
        let index_before = state.current_player_index;
        advance_turn(&mut state).unwrap();
        assert!(state.is_finished());
        assert_eq!(state.current_player_index, index_before);
    }

    #[test]
    fn test_setup_never_terminates() {
        let mut state = GameState::new(GameSettings::new().with_target_win_count(0));
        assert!(!check_termination(&mut state));
        assert_eq!(state.phase, Phase::Setup);
    }

    #[test]
    fn test_winner_by_metric() {
        let mut state = playing_state(GameSettings::new().with_target_win_count(3));
        give_timeline(&mut state, 1, 3);
        give_timeline(&mut state, 0, 1);
        check_termination(&mut state);

        assert_eq!(winner(&state), Some(GameOutcome::Winner(PlayerId::new(1))));
    }

    #[test]
    fn test_winner_tiebreak_tokens_then_score() {
        let mut state = playing_state(GameSettings::new().with_target_win_count(2));
        give_timeline(&mut state, 0, 2);
        give_timeline(&mut state, 1, 2);
        state.players[0].tokens = 1;
        state.players[1].tokens = 1;
        state.players[0].score = 4;
        state.players[1].score = 2;
        check_termination(&mut state);

        assert_eq!(winner(&state), Some(GameOutcome::Winner(PlayerId::new(0))));
    }

    #[test]
    fn test_full_tie_is_surfaced() {
        let mut state = playing_state(GameSettings::new().with_target_win_count(1));
        give_timeline(&mut state, 0, 1);
        give_timeline(&mut state, 2, 1);
        check_termination(&mut state);

        let outcome = winner(&state).unwrap();
        assert_eq!(
            outcome,
            GameOutcome::Tie(vec![PlayerId::new(0), PlayerId::new(2)])
        );
        assert!(outcome.is_winner(PlayerId::new(0)));
        assert!(!outcome.is_winner(PlayerId::new(1)));
        assert!(outcome.is_winner(PlayerId::new(2)));
    }

    #[test]
    fn test_no_winner_while_playing() {
        let state = playing_state(GameSettings::default());
        assert_eq!(winner(&state), None);
    }
}
