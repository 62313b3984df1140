//! Game rules: placement, token economy, and turn control.
//!
//! All rules are free functions over `&mut GameState` so that every
//! mutation path is explicit and testable in isolation. The `session`
//! module composes them into the UI-facing surface.

pub mod placement;
pub mod tokens;
pub mod turns;

pub use placement::{place, points_for_timeline_len, Placement};
pub use tokens::{award_bonus_tokens, use_token, Ability};
pub use turns::{advance_turn, check_termination, metric_value, winner, GameOutcome};
