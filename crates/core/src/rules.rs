//! Rules module - closing conditions for tiebreaks, sets and the match
//!
//! These are pure predicates over counters. The scorer applies them after
//! every counter change; tests use them to check completed sets.

use crate::types::{
    PerSide, Side, GAMES_TO_WIN_SET, SETS_TO_WIN, TIEBREAK_AT_GAMES, TIEBREAK_POINTS_TO_WIN,
    WIN_MARGIN,
};

/// Whether `own` closes out against `other`: at least `target` and ahead by
/// at least [`WIN_MARGIN`].
fn closes_out(own: u16, other: u16, target: u16) -> bool {
    own >= target && own.saturating_sub(other) >= WIN_MARGIN as u16
}

/// Winner of a tiebreak at the given point counts, if decided.
/// First to 7, win by 2.
pub fn tiebreak_winner(points: PerSide<u16>) -> Option<Side> {
    Side::ALL
        .into_iter()
        .find(|&side| closes_out(points[side], points[side.opponent()], TIEBREAK_POINTS_TO_WIN))
}

/// Winner of a set decided on games (not via tiebreak), if any.
/// First to 6, win by 2.
pub fn set_winner(games: PerSide<u8>) -> Option<Side> {
    Side::ALL.into_iter().find(|&side| {
        closes_out(
            games[side] as u16,
            games[side.opponent()] as u16,
            GAMES_TO_WIN_SET as u16,
        )
    })
}

/// Games level at which the set is decided by a tiebreak.
pub fn is_tiebreak_score(games: PerSide<u8>) -> bool {
    games.us == TIEBREAK_AT_GAMES && games.them == TIEBREAK_AT_GAMES
}

/// Whether a set count wins the match (best of three).
pub fn wins_match(sets: u8) -> bool {
    sets >= SETS_TO_WIN
}

/// Whether a final games score is a legal completed set: won on games
/// (6+ with a 2-game lead) or won through the tiebreak (7-6 / 6-7).
pub fn is_completed_set(games: PerSide<u8>) -> bool {
    if set_winner(games).is_some() {
        return true;
    }
    let hi = games.us.max(games.them);
    let lo = games.us.min(games.them);
    hi == TIEBREAK_AT_GAMES + 1 && lo == TIEBREAK_AT_GAMES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiebreak_first_to_seven() {
        assert_eq!(tiebreak_winner(PerSide::new(7, 0)), Some(Side::Us));
        assert_eq!(tiebreak_winner(PerSide::new(5, 7)), Some(Side::Them));
        assert_eq!(tiebreak_winner(PerSide::new(6, 0)), None);
    }

    #[test]
    fn test_tiebreak_needs_two_point_lead() {
        assert_eq!(tiebreak_winner(PerSide::new(7, 6)), None);
        assert_eq!(tiebreak_winner(PerSide::new(8, 7)), None);
        assert_eq!(tiebreak_winner(PerSide::new(9, 7)), Some(Side::Us));
        assert_eq!(tiebreak_winner(PerSide::new(12, 14)), Some(Side::Them));
    }

    #[test]
    fn test_set_winner_on_games() {
        assert_eq!(set_winner(PerSide::new(6, 0)), Some(Side::Us));
        assert_eq!(set_winner(PerSide::new(6, 4)), Some(Side::Us));
        assert_eq!(set_winner(PerSide::new(3, 6)), Some(Side::Them));
        assert_eq!(set_winner(PerSide::new(6, 5)), None);
        assert_eq!(set_winner(PerSide::new(7, 5)), Some(Side::Us));
        assert_eq!(set_winner(PerSide::new(5, 5)), None);
        assert_eq!(set_winner(PerSide::new(0, 0)), None);
    }

    #[test]
    fn test_tiebreak_score() {
        assert!(is_tiebreak_score(PerSide::new(6, 6)));
        assert!(!is_tiebreak_score(PerSide::new(6, 5)));
        assert!(!is_tiebreak_score(PerSide::new(7, 6)));
    }

    #[test]
    fn test_match_needs_two_sets() {
        assert!(!wins_match(0));
        assert!(!wins_match(1));
        assert!(wins_match(2));
    }

    #[test]
    fn test_completed_set_shapes() {
        assert!(is_completed_set(PerSide::new(6, 0)));
        assert!(is_completed_set(PerSide::new(7, 5)));
        assert!(is_completed_set(PerSide::new(7, 6)));
        assert!(is_completed_set(PerSide::new(6, 7)));
        assert!(!is_completed_set(PerSide::new(6, 6)));
        assert!(!is_completed_set(PerSide::new(6, 5)));
        assert!(!is_completed_set(PerSide::new(4, 2)));
    }
}
