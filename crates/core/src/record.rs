//! Match records - the immutable summary handed to the history store.
//!
//! A record can be derived at any point: at natural completion, or
//! mid-match when the user ends the game early. For an unfinished match
//! the winner is provisional (see [`resolve_us_won`]).

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::MatchState;
use crate::types::Side;

/// Finalized summary of one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub us_sets: u8,
    pub them_sets: u8,
    /// Per-set games, e.g. `["6-4", "3-6", "6-2"]`.
    pub set_scores: Vec<String>,
    pub us_won: bool,
}

impl MatchRecord {
    pub fn sets_display(&self) -> String {
        format!("{} - {}", self.us_sets, self.them_sets)
    }

    pub fn set_scores_display(&self) -> String {
        self.set_scores.join(", ")
    }

    pub fn result_label(&self) -> &'static str {
        if self.us_won {
            "Won"
        } else {
            "Lost"
        }
    }

    /// Local date and time, e.g. "Mar 4, 2026 18:30".
    pub fn formatted_date(&self) -> String {
        self.date
            .with_timezone(&Local)
            .format("%b %-d, %Y %H:%M")
            .to_string()
    }
}

/// Build a record with a fresh id, stamped now.
pub fn build_record(state: &MatchState) -> MatchRecord {
    build_record_with(state, Uuid::new_v4(), Utc::now())
}

/// Build a record with a caller-chosen id and timestamp.
pub fn build_record_with(state: &MatchState, id: Uuid, date: DateTime<Utc>) -> MatchRecord {
    MatchRecord {
        id,
        date,
        us_sets: state.sets.us,
        them_sets: state.sets.them,
        set_scores: set_scores(state),
        us_won: resolve_us_won(state),
    }
}

/// "us-them" games for every decided set, plus the set in progress if any
/// game of it has been played.
pub fn set_scores(state: &MatchState) -> Vec<String> {
    let mut scores: Vec<String> = state
        .completed_sets()
        .iter()
        .map(|g| format!("{}-{}", g.us, g.them))
        .collect();

    // Once the match is over the current set is the deciding one and is
    // already listed above.
    if !state.match_over && state.current_set_started() {
        let g = state.current_games();
        scores.push(format!("{}-{}", g.us, g.them));
    }

    scores
}

/// Whether `Us` is reported as the winner.
///
/// Finished match: the recorded winner. Otherwise the side ahead on sets,
/// and with sets level the side ahead on games in the current set. Level
/// games report `Us`: only `Them` strictly ahead counts as a `Them` win.
pub fn resolve_us_won(state: &MatchState) -> bool {
    if state.match_over {
        return state.winner == Some(Side::Us);
    }
    if state.sets.us != state.sets.them {
        return state.sets.us > state.sets.them;
    }
    let games = state.current_games();
    games.them <= games.us
}
