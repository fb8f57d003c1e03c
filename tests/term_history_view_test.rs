use chrono::{TimeZone, Utc};
use padel_scorer::core::{build_record_with, MatchRecord, MatchScorer};
use padel_scorer::term::{palette, HistoryView, Viewport};
use padel_scorer::types::Side;
use uuid::Uuid;

fn record(n: u128, winner: Side) -> MatchRecord {
    let mut scorer = MatchScorer::new();
    for _ in 0..48 {
        scorer.score_point(winner);
    }
    let date = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
    build_record_with(scorer.state(), Uuid::from_u128(n), date)
}

#[test]
fn empty_history_shows_placeholder() {
    let fb = HistoryView::default().render(&[], 0, None, Viewport::new(70, 20));
    let text = fb.text();
    assert!(text.contains(" HISTORY "));
    assert!(text.contains("No matches yet"));
    assert!(text.contains("Complete a match to see it here"));
}

#[test]
fn rows_show_result_sets_and_set_scores() {
    let records = vec![record(1, Side::Us), record(2, Side::Them)];
    let fb = HistoryView::default().render(&records, 0, None, Viewport::new(70, 20));
    let text = fb.text();

    assert!(!text.contains("No matches yet"));
    assert!(text.contains("Won"));
    assert!(text.contains("Lost"));
    assert!(text.contains("2 - 0"));
    assert!(text.contains("0 - 2"));
    assert!(text.contains("6-0, 6-0"));
    assert!(text.contains("0-6, 0-6"));
    assert!(text.contains("2024"));
}

#[test]
fn selected_row_is_marked_and_highlighted() {
    let records = vec![record(1, Side::Us), record(2, Side::Us), record(3, Side::Them)];
    let fb = HistoryView::default().render(&records, 2, None, Viewport::new(70, 20));

    let marked: Vec<u16> = (0..fb.height())
        .filter(|&y| fb.row_text(y).contains('▸'))
        .collect();
    assert_eq!(marked.len(), 1);

    let y = marked[0];
    assert!(fb.row_text(y).contains("Lost"));
    let x = fb.row_text(y).chars().position(|c| c == '▸').unwrap() as u16;
    assert_eq!(fb.get(x, y).unwrap().style.bg, palette::SELECTED);
}

#[test]
fn long_lists_scroll_to_the_selection() {
    let records: Vec<_> = (0..30).map(|n| record(n, Side::Us)).collect();
    let view = HistoryView::default();
    let vp = Viewport::new(70, 12);

    let fb = view.render(&records, 29, None, vp);
    assert_eq!(
        (0..fb.height()).filter(|&y| fb.row_text(y).contains('▸')).count(),
        1
    );

    let fb = view.render(&records, 0, None, vp);
    assert_eq!(
        (0..fb.height()).filter(|&y| fb.row_text(y).contains('▸')).count(),
        1
    );
}

#[test]
fn clear_prompt_overlays_list() {
    let records = vec![record(1, Side::Us)];
    let fb = HistoryView::default().render(
        &records,
        0,
        Some("Delete all saved matches?"),
        Viewport::new(70, 20),
    );
    assert!(fb.text().contains("Delete all saved matches?"));
}
