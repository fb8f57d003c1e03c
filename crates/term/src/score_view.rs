//! ScoreView: maps a `MatchState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It only reads the derived display strings
//! of the state; it never changes the match.

use crate::core::MatchState;
use crate::fb::{palette, Cell, CellStyle, FrameBuffer};
use crate::types::Side;
use crate::widgets::{draw_frame, draw_prompt, Rect, Viewport};

/// Scoreboard card for the match in progress.
pub struct ScoreView {
    card_w: u16,
    card_h: u16,
}

impl Default for ScoreView {
    fn default() -> Self {
        Self {
            card_w: 40,
            card_h: 13,
        }
    }
}

impl ScoreView {
    pub fn new(card_w: u16, card_h: u16) -> Self {
        Self { card_w, card_h }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        state: &MatchState,
        prompt: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let r = Rect::centered(viewport, self.card_w, self.card_h);
        let border = CellStyle::fg(palette::BORDER, palette::BACKGROUND);
        draw_frame(fb, r, Some("PADEL"), border);

        let x = r.x + 1;
        let w = r.inner_w();
        let text = CellStyle::fg(palette::TEXT, palette::PANEL);
        let muted = CellStyle::fg(palette::MUTED, palette::PANEL);

        let mut y = r.y + 1;
        let status_style = if state.match_over {
            let fg = if state.winner == Some(Side::Us) {
                palette::WON
            } else {
                palette::LOST
            };
            CellStyle::fg(fg, palette::PANEL).bold()
        } else {
            muted
        };
        fb.put_str_centered(x, w, y, &state.status_text(), status_style);

        y += 2;
        self.draw_line(fb, x, w, y, "Sets", &state.sets_display());
        y += 1;
        self.draw_line(fb, x, w, y, "Games", &state.games_display());

        y += 2;
        fb.put_str_centered(
            x,
            w,
            y,
            &state.points_display(),
            CellStyle::fg(palette::POINTS, palette::PANEL).bold(),
        );

        y += 2;
        if state.match_over {
            fb.put_str_centered(x, w, y, "r  new match", text.bold());
        } else {
            let half = w / 2;
            fb.put_str_centered(
                x,
                half,
                y,
                "US  ← a",
                CellStyle::fg(palette::US, palette::PANEL).bold(),
            );
            fb.put_str_centered(
                x + half,
                w - half,
                y,
                "d →  THEM",
                CellStyle::fg(palette::THEM, palette::PANEL).bold(),
            );
        }

        let hints = if state.match_over {
            "h history  q quit"
        } else {
            "e end & save  r reset  h history"
        };
        fb.put_str_centered(x, w, r.y + r.h.saturating_sub(2), hints, muted);

        if let Some(text) = prompt {
            draw_prompt(fb, viewport, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &MatchState, prompt: Option<&str>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, prompt, viewport, &mut fb);
        fb
    }

    fn draw_line(&self, fb: &mut FrameBuffer, x: u16, w: u16, y: u16, label: &str, value: &str) {
        let muted = CellStyle::fg(palette::MUTED, palette::PANEL);
        let value_style = CellStyle::fg(palette::TEXT, palette::PANEL).bold();
        fb.put_str(x + 3, y, label, muted);
        fb.put_str_centered(x, w, y, value, value_style);
    }
}
