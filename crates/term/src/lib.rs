//! Terminal scoreboard rendering.
//!
//! Screens render into a simple framebuffer that is then flushed to the
//! terminal by diffing against the previous frame. No widget toolkit is
//! involved: the views only read display strings from the core, which keeps
//! them pure and easy to test.

pub mod fb;
pub mod history_view;
pub mod render_throttle;
pub mod renderer;
pub mod score_view;
pub mod widgets;

pub use padel_scorer_core as core;
pub use padel_scorer_types as types;

pub use fb::{palette, Cell, CellStyle, FrameBuffer, Rgb};
pub use history_view::HistoryView;
pub use render_throttle::{fingerprint, RenderThrottle};
pub use renderer::{encode_diff_into, encode_frame_into, encode_full_into, TerminalRenderer};
pub use score_view::ScoreView;
pub use widgets::{Rect, Viewport};
