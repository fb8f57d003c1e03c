//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize or `invalidate`) clears the
//! screen and writes every cell. Other frames only write the runs of cells
//! that changed. Style escapes are emitted only when the style differs from
//! the one already active on the terminal.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Switch to raw mode on the alternate screen.
    pub fn enter(&mut self, title: &str) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(terminal::SetTitle(title))?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Restore the terminal. Safe to call after a failed `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, diffing against the previous frame.
    ///
    /// The previous frame is swapped back into `fb`, so callers keep one
    /// framebuffer and re-render into it every frame without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(self.last.as_ref(), fb, &mut self.buf)?;
        self.flush_buf()?;

        let mut prev = self.last.take().unwrap_or_else(|| FrameBuffer::new(0, 0));
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode `next` into `out`: a diff against `prev` when it has the same
/// size, otherwise a full redraw.
pub fn encode_frame_into(
    prev: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<()> {
    match prev {
        Some(prev) if prev.width() == next.width() && prev.height() == next.height() => {
            encode_diff_into(prev, next, out)
        }
        _ => encode_full_into(next, out),
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut pen = Pen::default();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        pen.print_span(out, fb, 0, y, fb.width())?;
    }
    pen.finish(out)
}

/// Encode only the changed runs of `next` into `out`.
///
/// Both frames must have the same size; see [`encode_frame_into`].
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::default();
    for run in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(run.x, run.y))?;
        pen.print_span(out, next, run.x, run.y, run.len)?;
    }
    pen.finish(out)
}

/// Style currently active on the terminal while encoding one frame.
#[derive(Default)]
struct Pen {
    active: Option<CellStyle>,
}

impl Pen {
    fn print_span(
        &mut self,
        out: &mut Vec<u8>,
        fb: &FrameBuffer,
        x: u16,
        y: u16,
        len: u16,
    ) -> Result<()> {
        for cx in x..x.saturating_add(len) {
            let cell = fb.get(cx, y).unwrap_or_default();
            self.set_style(out, cell.style)?;
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    /// Switch to `style`, writing only the escapes that differ.
    fn set_style(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        let keep = match self.active {
            Some(active) if active == style => return Ok(()),
            // SGR 0 is the only way to drop bold or dim, and it also drops
            // the colors, so everything is written again after it.
            Some(active) if (active.bold && !style.bold) || (active.dim && !style.dim) => None,
            active => active,
        };

        if keep.is_none() {
            out.queue(SetAttribute(Attribute::Reset))?;
        }
        if keep.map_or(true, |k| k.fg != style.fg) {
            out.queue(SetForegroundColor(to_color(style.fg)))?;
        }
        if keep.map_or(true, |k| k.bg != style.bg) {
            out.queue(SetBackgroundColor(to_color(style.bg)))?;
        }
        if style.bold && !keep.is_some_and(|k| k.bold) {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim && !keep.is_some_and(|k| k.dim) {
            out.queue(SetAttribute(Attribute::Dim))?;
        }

        self.active = Some(style);
        Ok(())
    }

    fn finish(self, out: &mut Vec<u8>) -> Result<()> {
        if self.active.is_some() {
            out.queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// A horizontal run of changed cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    x: u16,
    y: u16,
    len: u16,
}

/// Runs of cells that differ between two frames of the same size.
fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<Run> {
    let mut runs = Vec::new();
    for y in 0..next.height() {
        let mut start: Option<u16> = None;
        for x in 0..next.width() {
            let dirty = prev.get(x, y) != next.get(x, y);
            match (dirty, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    runs.push(Run { x: s, y, len: x - s });
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push(Run { x: s, y, len: next.width() - s });
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::{palette, Cell};

    const RESET: &str = "\x1b[0m";
    const WON_FG: &str = "\x1b[38;2;110;220;120m";
    const PANEL_BG: &str = "\x1b[48;2;24;26;32m";

    fn encode_full(fb: &FrameBuffer) -> String {
        let mut out = Vec::new();
        encode_full_into(fb, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn full_encode_contains_every_glyph() {
        let mut fb = FrameBuffer::new(5, 2);
        fb.put_str(0, 0, "15-0", CellStyle::default());
        fb.put_str(0, 1, "Set 1", CellStyle::default());

        let text = encode_full(&fb);
        assert!(text.contains("15-0"));
        assert!(text.contains("Set 1"));
        assert!(text.ends_with(RESET));
    }

    #[test]
    fn colors_survive_the_attribute_reset() {
        let mut fb = FrameBuffer::new(1, 1);
        let style = CellStyle::fg(palette::WON, palette::PANEL).bold();
        fb.put_char(0, 0, 'W', style);

        let text = encode_full(&fb);
        let prefix = &text[..text.find('W').unwrap()];
        let reset = prefix.rfind(RESET).unwrap();
        let fg = prefix.rfind(WON_FG).expect("foreground color emitted");
        let bg = prefix.rfind(PANEL_BG).expect("background color emitted");
        assert!(fg > reset && bg > reset, "reset after color: {prefix:?}");
        assert!(prefix.ends_with("\x1b[1m"));
    }

    #[test]
    fn same_style_is_written_once() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(0, 0, "Won", CellStyle::fg(palette::WON, palette::PANEL));

        let text = encode_full(&fb);
        assert_eq!(text.matches(WON_FG).count(), 1);
        assert!(text.contains("Won"));
    }

    #[test]
    fn background_change_keeps_foreground() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.put_char(0, 0, 'a', CellStyle::fg(palette::TEXT, palette::PANEL));
        fb.put_char(1, 0, 'b', CellStyle::fg(palette::TEXT, palette::SELECTED));

        let text = encode_full(&fb);
        let between = &text[text.find('a').unwrap() + 1..text.find('b').unwrap()];
        assert_eq!(between, "\x1b[48;2;60;64;80m");
    }

    #[test]
    fn dropping_bold_resets_and_rewrites_colors() {
        let mut fb = FrameBuffer::new(2, 1);
        let plain = CellStyle::fg(palette::LOST, palette::PANEL);
        fb.put_char(0, 0, 'L', plain.bold());
        fb.put_char(1, 0, 'x', plain);

        let text = encode_full(&fb);
        let between = &text[text.find('L').unwrap() + 1..text.find('x').unwrap()];
        assert!(between.starts_with(RESET));
        assert!(between.contains("\x1b[38;2;230;90;90m"));
        assert!(between.contains(PANEL_BG));
        assert!(!between.contains("\x1b[1m"));
    }

    #[test]
    fn unchanged_frame_encodes_nothing() {
        let mut a = FrameBuffer::new(6, 1);
        a.put_str(0, 0, "Deuce", CellStyle::default());
        let b = a.clone();

        assert!(changed_runs(&a, &b).is_empty());
        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(6, 2);
        let mut b = a.clone();
        for x in 1..=3 {
            b.set(x, 0, Cell { ch: 'A', style });
        }
        b.set(5, 1, Cell { ch: 'D', style });

        assert_eq!(
            changed_runs(&a, &b),
            vec![Run { x: 1, y: 0, len: 3 }, Run { x: 5, y: 1, len: 1 }]
        );
    }

    #[test]
    fn size_change_falls_back_to_full_redraw() {
        let small = FrameBuffer::new(2, 1);
        let mut big = FrameBuffer::new(3, 1);
        big.put_str(0, 0, "AD", CellStyle::default());

        let mut out = Vec::new();
        encode_frame_into(Some(&small), &big, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("\x1b[2J"));

        let mut out = Vec::new();
        encode_frame_into(Some(&big), &big, &mut out).unwrap();
        assert!(out.is_empty());
    }
}
