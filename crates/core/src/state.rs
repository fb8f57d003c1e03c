//! Match state and the read-only views derived from it.
//!
//! `MatchState` is plain data. Only [`MatchScorer`](crate::MatchScorer)
//! mutates it; everything here is a pure function of a state value.

use arrayvec::ArrayVec;

use crate::types::{GamePhase, PerSide, PointValue, Side, MAX_SETS};

/// Tiebreak sub-state, active only at 6-6 in the current set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TiebreakState {
    pub active: bool,
    pub points: PerSide<u16>,
}

/// Complete state of one match.
///
/// Invariants maintained by the scorer:
/// - games for sets before `current_set` are final
/// - `tiebreak.active` iff both sides hold 6 games in the current set
/// - points are Love and `phase` is Normal while a tiebreak is active or
///   once the match is over
/// - `winner` is set exactly when `match_over` is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MatchState {
    pub points: PerSide<PointValue>,
    pub phase: GamePhase,
    /// Games per set, indexed by set number.
    pub games: PerSide<[u8; MAX_SETS]>,
    pub sets: PerSide<u8>,
    pub current_set: usize,
    pub tiebreak: TiebreakState,
    pub match_over: bool,
    pub winner: Option<Side>,
}

impl MatchState {
    /// Games in a given set.
    pub fn games_in(&self, set: usize) -> PerSide<u8> {
        PerSide::new(self.games.us[set], self.games.them[set])
    }

    /// Games in the set being played (or the deciding set once over).
    pub fn current_games(&self) -> PerSide<u8> {
        self.games_in(self.current_set)
    }

    /// Number of sets already decided.
    pub fn completed_set_count(&self) -> usize {
        (self.sets.us + self.sets.them) as usize
    }

    /// Final games score of every decided set, in play order.
    pub fn completed_sets(&self) -> ArrayVec<PerSide<u8>, MAX_SETS> {
        (0..self.completed_set_count().min(MAX_SETS))
            .map(|i| self.games_in(i))
            .collect()
    }

    /// Whether any game has been played in the current set.
    pub fn current_set_started(&self) -> bool {
        let games = self.current_games();
        games.us > 0 || games.them > 0
    }

    /// Current point score: tiebreak points, "Deuce", "AD - 40", "40 - AD"
    /// or the regular point values.
    pub fn points_display(&self) -> String {
        if self.tiebreak.active {
            return format!(
                "{} - {}",
                self.tiebreak.points.us, self.tiebreak.points.them
            );
        }

        match self.phase {
            GamePhase::Normal => {
                format!("{} - {}", self.points.us.as_str(), self.points.them.as_str())
            }
            GamePhase::Deuce => "Deuce".to_string(),
            GamePhase::Advantage(Side::Us) => "AD - 40".to_string(),
            GamePhase::Advantage(Side::Them) => "40 - AD".to_string(),
        }
    }

    pub fn games_display(&self) -> String {
        let games = self.current_games();
        format!("{} - {}", games.us, games.them)
    }

    pub fn sets_display(&self) -> String {
        format!("{} - {}", self.sets.us, self.sets.them)
    }

    /// "Set N", "Tiebreak", or the final result.
    pub fn status_text(&self) -> String {
        if self.match_over {
            return match self.winner {
                Some(Side::Us) => "We Won!".to_string(),
                _ => "They Won".to_string(),
            };
        }
        if self.tiebreak.active {
            return "Tiebreak".to_string();
        }
        format!("Set {}", self.current_set + 1)
    }
}
