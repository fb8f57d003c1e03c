//! Shared drawing helpers: viewport, framed panels and prompt boxes.

use crate::fb::{palette, text_width, CellStyle, FrameBuffer};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A rectangle placed inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    /// `w` x `h` centered in the viewport, shrunk to fit.
    pub fn centered(viewport: Viewport, w: u16, h: u16) -> Self {
        let w = w.min(viewport.width);
        let h = h.min(viewport.height);
        Self {
            x: (viewport.width - w) / 2,
            y: (viewport.height - h) / 2,
            w,
            h,
        }
    }

    /// Columns available inside the border.
    pub fn inner_w(&self) -> u16 {
        self.w.saturating_sub(2)
    }

    /// Rows available inside the border.
    pub fn inner_h(&self) -> u16 {
        self.h.saturating_sub(2)
    }
}

/// Border with an optional title in the top edge.
pub fn draw_frame(fb: &mut FrameBuffer, r: Rect, title: Option<&str>, style: CellStyle) {
    if r.w < 2 || r.h < 2 {
        return;
    }

    let inside = CellStyle::fg(palette::TEXT, palette::PANEL);
    fb.fill_rect(r.x + 1, r.y + 1, r.inner_w(), r.inner_h(), ' ', inside);

    fb.put_char(r.x, r.y, '┌', style);
    fb.put_char(r.x + r.w - 1, r.y, '┐', style);
    fb.put_char(r.x, r.y + r.h - 1, '└', style);
    fb.put_char(r.x + r.w - 1, r.y + r.h - 1, '┘', style);

    for dx in 1..r.w - 1 {
        fb.put_char(r.x + dx, r.y, '─', style);
        fb.put_char(r.x + dx, r.y + r.h - 1, '─', style);
    }
    for dy in 1..r.h - 1 {
        fb.put_char(r.x, r.y + dy, '│', style);
        fb.put_char(r.x + r.w - 1, r.y + dy, '│', style);
    }

    if let Some(title) = title {
        let label = format!(" {title} ");
        if text_width(&label) + 2 <= r.w {
            fb.put_str_centered(r.x, r.w, r.y, &label, style.bold());
        }
    }
}

/// Confirmation box centered over whatever is already drawn.
pub fn draw_prompt(fb: &mut FrameBuffer, viewport: Viewport, text: &str) {
    let hint = "y confirm  n cancel";
    let w = text_width(text).max(text_width(hint)) + 4;
    let r = Rect::centered(viewport, w, 5);

    let border = CellStyle::fg(palette::THEM, palette::BACKGROUND).bold();
    draw_frame(fb, r, None, border);

    let inside = CellStyle::fg(palette::TEXT, palette::PANEL);
    fb.put_str_centered(r.x + 1, r.inner_w(), r.y + 1, text, inside.bold());
    fb.put_str_centered(
        r.x + 1,
        r.inner_w(),
        r.y + 3,
        hint,
        CellStyle::fg(palette::MUTED, palette::PANEL),
    );
}
