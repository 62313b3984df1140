//! Token economy: bonus-token rules and ability spending.
//!
//! Tokens are the game's currency. Every correct placement grants one base
//! token (handled by the placement engine); this module adds the three
//! stacking bonus rules and the spend side.
//!
//! ## Bonus rules
//!
//! Evaluated once per successful placement, each independently; a single
//! placement can fire several at once:
//!
//! 1. **Milestone** - timeline length is a positive multiple of 5.
//! 2. **Decade diversity** - the last 3 entries span 3 distinct decades.
//! 3. **Consecutive run** - the timeline suffix of years differing by at
//!    most 1 is 3 or longer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameState, Player, PlayerId};
use crate::timeline;

/// Special abilities a token can be spent on.
///
/// Only `Skip` has an effect inside the engine (it discards the pending
/// candidate so a fresh one must be fetched). The rest consume a token and
/// hand the tag to the UI/provider layer, which owns their behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    /// Discard the current track and fetch a new one.
    Skip,
    /// Reveal decade information about the current track.
    Hint,
    /// Challenge another player's timeline.
    Challenge,
    /// Swap two cards on your own timeline.
    Swap,
    /// Peek at the next card before placing the current one.
    Peek,
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Ability::Skip => "skip",
            Ability::Hint => "hint",
            Ability::Challenge => "challenge",
            Ability::Swap => "swap",
            Ability::Peek => "peek",
        };
        write!(f, "{name}")
    }
}

/// Run the bonus rules against a player's timeline and grant one token per
/// matching rule. Returns the number of bonus tokens granted.
pub fn award_bonus_tokens(player: &mut Player) -> u32 {
    let timeline = &player.timeline;
    let mut granted = 0;

    // Rule 1: timeline length milestone (every 5 cards)
    if !timeline.is_empty() && timeline.len() % 5 == 0 {
        granted += 1;
        debug!(player = %player.id, len = timeline.len(), "milestone bonus token");
    }

    // Rule 2: last 3 entries span 3 distinct decades
    if timeline.len() >= 3 {
        let last_three = &timeline[timeline.len() - 3..];
        let (a, b, c) = (
            timeline::decade(last_three[0].year),
            timeline::decade(last_three[1].year),
            timeline::decade(last_three[2].year),
        );
        if a != b && b != c && a != c {
            granted += 1;
            debug!(player = %player.id, "decade diversity bonus token");
        }
    }

    // Rule 3: consecutive-year suffix run of 3 or more
    let run = timeline::consecutive_suffix_len(timeline);
    if run >= 3 {
        granted += 1;
        debug!(player = %player.id, run, "consecutive run bonus token");
    }

    player.tokens += granted;
    granted
}

/// Spend one token on an ability.
///
/// Preconditions: the player exists and has at least one token. On
/// precondition failure nothing is mutated and `false` is returned. On
/// success the balance drops by one, the ability's engine-side effect is
/// applied, and `true` is returned.
pub fn use_token(state: &mut GameState, player_id: PlayerId, ability: Ability) -> bool {
    let Some(player) = state.player_mut(player_id) else {
        return false;
    };
    if player.tokens == 0 {
        return false;
    }

    player.tokens -= 1;
    debug!(player = %player_id, %ability, "token spent");

    if ability == Ability::Skip {
        state.current_track = None;
    }

    true
}
