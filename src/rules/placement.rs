//! Placement engine: insert, validate, commit or revert.
//!
//! The engine inserts the pending candidate into the acting player's
//! timeline at the chosen position, then checks chronological order:
//!
//! - Ordered: the track is revealed and stays; the player earns tier
//!   points, one base token, and any bonus tokens; termination is
//!   evaluated immediately so a winning placement finishes the game
//!   without waiting for the turn to advance.
//! - Not ordered: the insertion is removed, restoring the timeline
//!   exactly; nothing else changes.
//!
//! Either way the candidate stays in `current_track` - clearing it is the
//! turn controller's job, so the UI can show a result screen first.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameError, GameState};
use crate::timeline;

use super::tokens::award_bonus_tokens;
use super::turns::check_termination;

/// Points granted for a correct placement, by resulting timeline length.
///
/// Monotonic: a longer timeline never pays less. The exact thresholds are
/// tunable policy, not a rules contract.
#[must_use]
pub fn points_for_timeline_len(len: usize) -> u32 {
    match len {
        0..=4 => 1,
        5..=9 => 2,
        _ => 3,
    }
}

/// Outcome of a placement attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Whether the insertion kept the timeline ordered.
    pub success: bool,

    /// Points added to the player's score (0 on failure).
    pub points_awarded: u32,

    /// Tokens granted for this placement: 1 base + bonuses (0 on failure).
    pub tokens_awarded: u32,
}

impl Placement {
    /// The failure outcome: nothing awarded.
    #[must_use]
    pub const fn incorrect() -> Self {
        Self {
            success: false,
            points_awarded: 0,
            tokens_awarded: 0,
        }
    }
}

/// Place the pending candidate into the acting player's timeline at
/// `position` (0 prepends, `timeline_len` appends).
///
/// ## Errors
///
/// - [`GameError::NotPlaying`] outside the `Playing` phase
/// - [`GameError::NoCurrentTrack`] if no candidate is pending
/// - [`GameError::PositionOutOfRange`] if `position > timeline_len`
/// - [`GameError::DuplicateTrack`] if the candidate id is already on the
///   acting player's timeline
///
/// On error the state is untouched.
pub fn place(state: &mut GameState, position: usize) -> Result<Placement, GameError> {
    state.require_playing()?;

    let track = state
        .current_track
        .clone()
        .ok_or(GameError::NoCurrentTrack)?;

    let index = state.current_player_index;
    let player = state.players.get_mut(index).ok_or(GameError::NotPlaying)?;

    let timeline_len = player.timeline.len();
    if position > timeline_len {
        return Err(GameError::PositionOutOfRange {
            position,
            timeline_len,
        });
    }
    if player.has_track(&track.id) {
        return Err(GameError::DuplicateTrack(track.id));
    }

    player.timeline.insert(position, track);

    if !timeline::is_ordered(&player.timeline) {
        // Revert the insertion; the timeline is exactly as before.
        player.timeline.remove(position);
        debug!(player = %player.id, position, "incorrect placement reverted");
        return Ok(Placement::incorrect());
    }

    player.timeline[position].revealed = true;

    let points = points_for_timeline_len(player.timeline.len());
    player.score += points;
    player.tokens += 1;
    let bonus = award_bonus_tokens(player);

    debug!(
        player = %player.id,
        position,
        points,
        tokens = 1 + bonus,
        "correct placement committed"
    );

    // A winning placement finishes the game right away.
    check_termination(state);

    Ok(Placement {
        success: true,
        points_awarded: points,
        tokens_awarded: 1 + bonus,
    })
}
