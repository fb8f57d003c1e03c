//! Core types module - shared vocabulary and rule constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (scoring logic, history storage, terminal rendering).
//!
//! # Match Format
//!
//! The format is fixed: best of three sets, standard padel/tennis games.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_SETS` | 3 | Set slots a match can ever need |
//! | `SETS_TO_WIN` | 2 | Sets needed to win the match |
//! | `GAMES_TO_WIN_SET` | 6 | Games needed to win a set (with a 2-game lead) |
//! | `TIEBREAK_AT_GAMES` | 6 | Both sides on this many games starts a tiebreak |
//! | `TIEBREAK_POINTS_TO_WIN` | 7 | Points needed to win a tiebreak (with a 2-point lead) |
//! | `WIN_MARGIN` | 2 | Lead required to close out a set or tiebreak |
//!
//! # Examples
//!
//! ```
//! use padel_scorer_types::{PerSide, PointValue, Side};
//!
//! let mut points = PerSide::splat(PointValue::Love);
//! points[Side::Us] = PointValue::Love.next().unwrap();
//! assert_eq!(points[Side::Us], PointValue::Fifteen);
//! assert_eq!(points[Side::Them].as_str(), "0");
//!
//! assert_eq!(Side::Us.opponent(), Side::Them);
//! ```

use std::ops::{Index, IndexMut};

/// Set slots a best-of-three match can ever need.
pub const MAX_SETS: usize = 3;

/// Sets needed to win the match.
pub const SETS_TO_WIN: u8 = 2;

/// Games needed to win a set, subject to [`WIN_MARGIN`].
pub const GAMES_TO_WIN_SET: u8 = 6;

/// Games each side must hold for the set to go to a tiebreak.
pub const TIEBREAK_AT_GAMES: u8 = 6;

/// Points needed to win a tiebreak, subject to [`WIN_MARGIN`].
pub const TIEBREAK_POINTS_TO_WIN: u16 = 7;

/// Lead required to close out a set or a tiebreak.
pub const WIN_MARGIN: u8 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_of_three_rule_constants() {
        assert_eq!(MAX_SETS, 3);
        assert_eq!(SETS_TO_WIN, 2);
        assert_eq!(GAMES_TO_WIN_SET, 6);
        assert_eq!(TIEBREAK_AT_GAMES, 6);
        assert_eq!(TIEBREAK_POINTS_TO_WIN, 7);
        assert_eq!(WIN_MARGIN, 2);
        // A decided match never needs more slots than it has sets.
        assert_eq!((SETS_TO_WIN as usize) * 2 - 1, MAX_SETS);
    }

    #[test]
    fn per_side_indexing() {
        let mut games = PerSide::new(3u8, 5u8);
        assert_eq!(games[Side::Us], 3);
        assert_eq!(games[Side::Them], 5);

        games[Side::Them] += 1;
        assert_eq!(games, PerSide::new(3, 6));
        assert_eq!(games.map(|g| g * 2), PerSide::new(6, 12));
    }

    #[test]
    fn point_value_progression_stops_at_forty() {
        let mut p = PointValue::Love;
        let mut seen = vec![p];
        while let Some(n) = p.next() {
            p = n;
            seen.push(p);
        }
        assert_eq!(
            seen,
            vec![
                PointValue::Love,
                PointValue::Fifteen,
                PointValue::Thirty,
                PointValue::Forty
            ]
        );
        assert!(PointValue::Love < PointValue::Forty);
    }
}

/// The two sides of the court.
///
/// The scorer is always kept from the owner's point of view: `Us` is the
/// player (or pair) holding the device, `Them` the opponents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Us,
    Them,
}

impl Side {
    /// Both sides, `Us` first.
    pub const ALL: [Side; 2] = [Side::Us, Side::Them];

    /// The other side.
    ///
    /// # Examples
    ///
    /// ```
    /// use padel_scorer_types::Side;
    ///
    /// assert_eq!(Side::Us.opponent(), Side::Them);
    /// assert_eq!(Side::Them.opponent(), Side::Us);
    /// ```
    pub fn opponent(&self) -> Self {
        match self {
            Side::Us => Side::Them,
            Side::Them => Side::Us,
        }
    }

    /// Human-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Side::Us => "Us",
            Side::Them => "Them",
        }
    }
}

/// A pair of values, one per [`Side`].
///
/// Match state is stored per side; indexing by `Side` lets the transition
/// logic be written once for whichever side scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PerSide<T> {
    pub us: T,
    pub them: T,
}

impl<T> PerSide<T> {
    pub const fn new(us: T, them: T) -> Self {
        Self { us, them }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> PerSide<U> {
        PerSide {
            us: f(self.us),
            them: f(self.them),
        }
    }
}

impl<T: Copy> PerSide<T> {
    /// Same value for both sides.
    pub const fn splat(value: T) -> Self {
        Self {
            us: value,
            them: value,
        }
    }
}

impl<T> Index<Side> for PerSide<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        match side {
            Side::Us => &self.us,
            Side::Them => &self.them,
        }
    }
}

impl<T> IndexMut<Side> for PerSide<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Us => &mut self.us,
            Side::Them => &mut self.them,
        }
    }
}

/// Point values within a regular game.
///
/// There is deliberately no arithmetic and no "advantage" value: advantage
/// only exists paired with the opponent pinned at Forty, so it lives in
/// [`GamePhase`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum PointValue {
    #[default]
    Love,
    Fifteen,
    Thirty,
    Forty,
}

impl PointValue {
    /// The next value after winning a point, or `None` from Forty.
    ///
    /// # Examples
    ///
    /// ```
    /// use padel_scorer_types::PointValue;
    ///
    /// assert_eq!(PointValue::Thirty.next(), Some(PointValue::Forty));
    /// assert_eq!(PointValue::Forty.next(), None);
    /// ```
    pub fn next(&self) -> Option<Self> {
        match self {
            PointValue::Love => Some(PointValue::Fifteen),
            PointValue::Fifteen => Some(PointValue::Thirty),
            PointValue::Thirty => Some(PointValue::Forty),
            PointValue::Forty => None,
        }
    }

    /// Scoreboard text ("0", "15", "30", "40").
    pub fn as_str(&self) -> &'static str {
        match self {
            PointValue::Love => "0",
            PointValue::Fifteen => "15",
            PointValue::Thirty => "30",
            PointValue::Forty => "40",
        }
    }
}

/// How the next point of a regular game is interpreted.
///
/// - **Normal**: points advance Love → Fifteen → Thirty → Forty
/// - **Deuce**: 40-40 after an advantage was lost
/// - **Advantage(side)**: `side` wins the game with the next point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Normal,
    Deuce,
    Advantage(Side),
}

/// Front-end commands produced by key mapping and consumed by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Award the next point to a side
    Score(Side),
    /// Save the match as it stands and start a new one (asks first)
    EndMatch,
    /// Discard the match and start a new one (asks first while live)
    Reset,
    /// Switch between the score screen and the history screen
    ToggleHistory,
    /// Move the history selection up
    SelectPrev,
    /// Move the history selection down
    SelectNext,
    /// Delete the selected history record
    DeleteSelected,
    /// Delete every history record (asks first)
    ClearHistory,
    /// Accept a pending prompt
    Confirm,
    /// Dismiss a pending prompt
    Cancel,
}
