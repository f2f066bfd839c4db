//! Terminal front end for the quiz.
//!
//! A small rendering layer: [`QuizView`] lays a session snapshot out into a
//! [`FrameBuffer`], and [`TerminalRenderer`] flushes that buffer to the
//! terminal. The view never touches the session; it only reads snapshots.

pub mod fb;
pub mod quiz_view;
pub mod renderer;

pub use natty_core as core;
pub use natty_types as types;

pub use fb::{wrap_text, Cell, CellStyle, FrameBuffer, Rgb};
pub use quiz_view::{rejection_hint, QuizView, Viewport};
pub use renderer::TerminalRenderer;
