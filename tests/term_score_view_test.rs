use padel_scorer::core::MatchScorer;
use padel_scorer::term::{palette, ScoreView, Viewport};
use padel_scorer::types::Side;

fn scorer_after(points: &[(Side, usize)]) -> MatchScorer {
    let mut scorer = MatchScorer::new();
    for &(side, n) in points {
        for _ in 0..n {
            scorer.score_point(side);
        }
    }
    scorer
}

#[test]
fn fresh_match_shows_zeroed_board() {
    let scorer = MatchScorer::new();
    let fb = ScoreView::default().render(scorer.state(), None, Viewport::new(60, 20));
    let text = fb.text();

    assert!(text.contains(" PADEL "));
    assert!(text.contains("Set 1"));
    assert!(text.contains("Sets"));
    assert!(text.contains("Games"));
    assert!(text.contains("0 - 0"));
    assert!(text.contains("US  ← a"));
    assert!(text.contains("d →  THEM"));
    assert!(text.contains("e end & save"));
}

#[test]
fn card_is_centered_with_border() {
    let scorer = MatchScorer::new();
    let fb = ScoreView::new(40, 13).render(scorer.state(), None, Viewport::new(60, 21));

    // (60 - 40) / 2 = 10, (21 - 13) / 2 = 4
    assert_eq!(fb.get(10, 4).unwrap().ch, '┌');
    assert_eq!(fb.get(49, 4).unwrap().ch, '┐');
    assert_eq!(fb.get(10, 16).unwrap().ch, '└');
    assert_eq!(fb.get(49, 16).unwrap().ch, '┘');
}

#[test]
fn advantage_and_tiebreak_text() {
    let scorer = scorer_after(&[(Side::Us, 3), (Side::Them, 4)]);
    let fb = ScoreView::default().render(scorer.state(), None, Viewport::new(60, 20));
    assert!(fb.text().contains("40 - AD"));

    let mut scorer = MatchScorer::new();
    for game in 0..12 {
        let side = if game % 2 == 0 { Side::Us } else { Side::Them };
        for _ in 0..4 {
            scorer.score_point(side);
        }
    }
    scorer.score_point(Side::Them);
    let fb = ScoreView::default().render(scorer.state(), None, Viewport::new(60, 20));
    let text = fb.text();
    assert!(text.contains("Tiebreak"));
    assert!(text.contains("6 - 6"));
    assert!(text.contains("0 - 1"));
}

#[test]
fn finished_match_shows_result_in_win_color() {
    let scorer = scorer_after(&[(Side::Us, 48)]);
    let fb = ScoreView::default().render(scorer.state(), None, Viewport::new(60, 20));
    let text = fb.text();

    assert!(text.contains("We Won!"));
    assert!(text.contains("2 - 0"));
    assert!(text.contains("r  new match"));
    assert!(!text.contains("US  ← a"));

    let (y, row) = (0..fb.height())
        .map(|y| (y, fb.row_text(y)))
        .find(|(_, row)| row.contains("We Won!"))
        .unwrap();
    let x = row.chars().position(|c| c == 'W').unwrap() as u16;
    assert_eq!(fb.get(x, y).unwrap().style.fg, palette::WON);
}

#[test]
fn loss_is_reported() {
    let scorer = scorer_after(&[(Side::Them, 48)]);
    let fb = ScoreView::default().render(scorer.state(), None, Viewport::new(60, 20));
    assert!(fb.text().contains("They Won"));
    assert!(fb.text().contains("0 - 2"));
}

#[test]
fn prompt_overlays_the_card() {
    let scorer = scorer_after(&[(Side::Us, 2)]);
    let fb = ScoreView::default().render(scorer.state(), Some("Reset match?"), Viewport::new(60, 20));
    let text = fb.text();
    assert!(text.contains("Reset match?"));
    assert!(text.contains("y confirm  n cancel"));
}

#[test]
fn tiny_viewport_does_not_panic() {
    let scorer = scorer_after(&[(Side::Us, 5)]);
    let view = ScoreView::default();
    for (w, h) in [(0, 0), (1, 1), (5, 3), (20, 6)] {
        let fb = view.render(scorer.state(), Some("End match and save?"), Viewport::new(w, h));
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}
