//! HistoryView: the saved-match list.

use crate::core::MatchRecord;
use crate::fb::{palette, Cell, CellStyle, FrameBuffer};
use crate::widgets::{draw_frame, draw_prompt, Rect, Viewport};

/// Scrolling list of saved matches, most recent first.
pub struct HistoryView {
    max_w: u16,
}

impl Default for HistoryView {
    fn default() -> Self {
        Self { max_w: 64 }
    }
}

impl HistoryView {
    /// Index of the first visible row so that `selected` stays on screen.
    pub fn scroll_offset(selected: usize, visible_rows: usize, len: usize) -> usize {
        if visible_rows == 0 || len <= visible_rows {
            return 0;
        }
        let selected = selected.min(len - 1);
        (selected + 1).saturating_sub(visible_rows)
    }

    pub fn render_into(
        &self,
        records: &[MatchRecord],
        selected: usize,
        prompt: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let r = Rect::centered(viewport, self.max_w, viewport.height);
        let border = CellStyle::fg(palette::BORDER, palette::BACKGROUND);
        draw_frame(fb, r, Some("HISTORY"), border);

        let x = r.x + 1;
        let w = r.inner_w();
        let muted = CellStyle::fg(palette::MUTED, palette::PANEL);

        // Footer hints take the last inner row.
        let footer_y = r.y + r.h.saturating_sub(2);
        let hints = if records.is_empty() {
            "h back  q quit"
        } else {
            "↑↓ select  x delete  C clear all  h back"
        };
        fb.put_str_centered(x, w, footer_y, hints, muted);

        if records.is_empty() {
            let mid = r.y + r.h / 2;
            fb.put_str_centered(x, w, mid.saturating_sub(1), "No matches yet", muted.bold());
            fb.put_str_centered(x, w, mid, "Complete a match to see it here", muted);
        } else {
            // Each record takes two rows.
            let first_y = r.y + 1;
            let rows = footer_y.saturating_sub(first_y + 1) as usize / 2;
            let offset = Self::scroll_offset(selected, rows, records.len());

            for (slot, (index, record)) in records
                .iter()
                .enumerate()
                .skip(offset)
                .take(rows)
                .enumerate()
            {
                let y = first_y + (slot as u16) * 2;
                self.draw_record(fb, x, w, y, record, index == selected);
            }
        }

        if let Some(text) = prompt {
            draw_prompt(fb, viewport, text);
        }
    }

    pub fn render(
        &self,
        records: &[MatchRecord],
        selected: usize,
        prompt: Option<&str>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(records, selected, prompt, viewport, &mut fb);
        fb
    }

    fn draw_record(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        w: u16,
        y: u16,
        record: &MatchRecord,
        selected: bool,
    ) {
        let bg = if selected {
            palette::SELECTED
        } else {
            palette::PANEL
        };
        fb.fill_rect(x, y, w, 2, ' ', CellStyle::fg(palette::TEXT, bg));

        let result_fg = if record.us_won {
            palette::WON
        } else {
            palette::LOST
        };
        let marker = if selected { "▸ " } else { "  " };
        let cx = fb.put_str(x + 1, y, marker, CellStyle::fg(palette::TEXT, bg));
        let cx = fb.put_str(cx, y, record.result_label(), CellStyle::fg(result_fg, bg).bold());
        let cx = fb.put_str(cx + 2, y, &record.sets_display(), CellStyle::fg(palette::TEXT, bg).bold());
        fb.put_str(cx + 3, y, &record.set_scores_display(), CellStyle::fg(palette::TEXT, bg));

        fb.put_str(
            x + 3,
            y + 1,
            &record.formatted_date(),
            CellStyle::fg(palette::MUTED, bg),
        );
    }
}
