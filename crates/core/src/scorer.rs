//! Match scorer - the points → games → sets → match state machine
//!
//! One scorer owns one [`MatchState`]. The only mutations are
//! [`MatchScorer::score_point`], [`MatchScorer::reset`] and
//! [`MatchScorer::end_early`]. Each scoring call reports what happened as a
//! [`ScoreEvent`], which doubles as the state-changed notification for the
//! presentation layer and carries the finished [`MatchRecord`] exactly once.

use tracing::{debug, info};

use crate::record::{build_record, MatchRecord};
use crate::rules;
use crate::state::{MatchState, TiebreakState};
use crate::types::{GamePhase, PointValue, Side};

/// Outcome of a single scoring call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreEvent {
    /// The match is already over; nothing changed.
    Ignored,
    /// A point was won without deciding the game (or tiebreak).
    PointWon(Side),
    /// A game was won and the set continues.
    GameWon(Side),
    /// A game was won and the set went to 6-6.
    TiebreakStarted,
    /// A set was won and the match continues.
    SetWon(Side),
    /// The match was won. Emitted once per match.
    MatchComplete(MatchRecord),
}

impl ScoreEvent {
    /// Whether the call changed the state.
    pub fn changed(&self) -> bool {
        !matches!(self, ScoreEvent::Ignored)
    }
}

/// Best-of-three match scorer.
#[derive(Debug, Clone, Default)]
pub struct MatchScorer {
    state: MatchState,
}

impl MatchScorer {
    /// Create a scorer in the zeroed initial state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn snapshot(&self) -> MatchState {
        self.state
    }

    pub fn match_over(&self) -> bool {
        self.state.match_over
    }

    pub fn winner(&self) -> Option<Side> {
        self.state.winner
    }

    /// Award a point to `side`.
    ///
    /// After the match is over this is a no-op returning
    /// [`ScoreEvent::Ignored`]; repeated taps at the end of a match are
    /// expected and harmless.
    pub fn score_point(&mut self, side: Side) -> ScoreEvent {
        if self.state.match_over {
            return ScoreEvent::Ignored;
        }

        if self.state.tiebreak.active {
            return self.score_tiebreak_point(side);
        }

        match self.state.phase {
            GamePhase::Normal => self.score_normal_point(side),
            GamePhase::Deuce => {
                self.state.phase = GamePhase::Advantage(side);
                ScoreEvent::PointWon(side)
            }
            GamePhase::Advantage(leader) if leader == side => self.win_game(side),
            GamePhase::Advantage(_) => {
                // Advantage lost; this is the only way into Deuce.
                self.state.phase = GamePhase::Deuce;
                ScoreEvent::PointWon(side)
            }
        }
    }

    /// Return to the zeroed initial state. Always permitted.
    pub fn reset(&mut self) {
        self.state = MatchState::default();
    }

    /// Stop the match before it is decided.
    ///
    /// Returns the record of the match as it stands and resets. A finished
    /// match already produced its record through
    /// [`ScoreEvent::MatchComplete`], so this returns `None` for it and
    /// leaves the state alone.
    pub fn end_early(&mut self) -> Option<MatchRecord> {
        if self.state.match_over {
            return None;
        }
        let record = build_record(&self.state);
        debug!(
            sets = %self.state.sets_display(),
            us_won = record.us_won,
            "match ended early"
        );
        self.reset();
        Some(record)
    }

    fn score_normal_point(&mut self, side: Side) -> ScoreEvent {
        match self.state.points[side].next() {
            Some(next) => {
                self.state.points[side] = next;
                ScoreEvent::PointWon(side)
            }
            None if self.state.points[side.opponent()] == PointValue::Forty => {
                // First 40-40 goes straight to advantage.
                self.state.phase = GamePhase::Advantage(side);
                ScoreEvent::PointWon(side)
            }
            None => self.win_game(side),
        }
    }

    fn score_tiebreak_point(&mut self, side: Side) -> ScoreEvent {
        self.state.tiebreak.points[side] += 1;

        match rules::tiebreak_winner(self.state.tiebreak.points) {
            Some(winner) => {
                // The tiebreak counts as the deciding game (7-6).
                let set = self.state.current_set;
                self.state.games[winner][set] += 1;
                self.win_set(winner)
            }
            None => ScoreEvent::PointWon(side),
        }
    }

    fn win_game(&mut self, side: Side) -> ScoreEvent {
        let set = self.state.current_set;
        self.state.games[side][set] += 1;
        self.reset_points();

        let games = self.state.current_games();
        if rules::is_tiebreak_score(games) {
            self.state.tiebreak = TiebreakState {
                active: true,
                ..TiebreakState::default()
            };
            debug!(set = set + 1, "tiebreak started");
            return ScoreEvent::TiebreakStarted;
        }

        match rules::set_winner(games) {
            Some(winner) => self.win_set(winner),
            None => ScoreEvent::GameWon(side),
        }
    }

    fn win_set(&mut self, side: Side) -> ScoreEvent {
        self.state.sets[side] += 1;
        self.state.tiebreak = TiebreakState::default();

        let set = self.state.current_set;
        debug!(
            set = set + 1,
            winner = side.label(),
            games = %self.state.games_display(),
            "set won"
        );

        if rules::wins_match(self.state.sets[side]) {
            self.state.match_over = true;
            self.state.winner = Some(side);
            let record = build_record(&self.state);
            info!(
                winner = side.label(),
                sets = %self.state.sets_display(),
                "match complete"
            );
            return ScoreEvent::MatchComplete(record);
        }

        self.state.current_set += 1;
        self.reset_points();
        ScoreEvent::SetWon(side)
    }

    fn reset_points(&mut self) {
        self.state.points = Default::default();
        self.state.phase = GamePhase::Normal;
    }
}
