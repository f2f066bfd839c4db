//! QuizView: maps a `SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::SessionSnapshot;
use crate::fb::{wrap_text, CellStyle, FrameBuffer, Rgb};
use crate::types::Guess;

const AMBER: Rgb = Rgb::new(245, 180, 40);
const GREEN: Rgb = Rgb::new(90, 210, 110);
const RED: Rgb = Rgb::new(235, 80, 80);
const GREY: Rgb = Rgb::new(150, 150, 160);
const WHITE: Rgb = Rgb::new(235, 235, 235);

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

/// Renders the quiz screen.
#[derive(Debug, Clone, Copy)]
pub struct QuizView {
    /// Maximum width of the text column.
    max_width: u16,
}

impl Default for QuizView {
    fn default() -> Self {
        Self { max_width: 64 }
    }
}

struct Line {
    text: String,
    style: CellStyle,
}

impl Line {
    fn new(text: impl Into<String>, style: CellStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn blank() -> Self {
        Self::new("", CellStyle::default())
    }
}

impl QuizView {
    pub fn new(max_width: u16) -> Self {
        Self {
            max_width: max_width.max(16),
        }
    }

    /// Render the snapshot into a framebuffer the size of the viewport.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        self.render_with_hint(snap, viewport, None)
    }

    /// Like [`QuizView::render`], with a one-line hint under the key legend.
    pub fn render_with_hint(
        &self,
        snap: &SessionSnapshot,
        viewport: Viewport,
        hint: Option<&str>,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let column = viewport.width.saturating_sub(2).min(self.max_width).max(1);
        let lines = self.layout(snap, hint, column as usize);

        let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let start_y = viewport.height.saturating_sub(total) / 2;
        for (dy, line) in lines.iter().enumerate() {
            let Ok(dy) = u16::try_from(dy) else { break };
            fb.put_centered(start_y.saturating_add(dy), &line.text, line.style);
        }
        fb
    }

    fn layout(&self, snap: &SessionSnapshot, hint: Option<&str>, width: usize) -> Vec<Line> {
        let mut lines = vec![
            Line::new("NATTY OR NOT", CellStyle::fg(AMBER).bold()),
            Line::new(
                "Can you tell who's natural and who's enhanced?",
                CellStyle::fg(GREY),
            ),
            Line::blank(),
        ];

        let Some(item) = snap.item.filter(|_| snap.started) else {
            lines.push(Line::new("Loading...", CellStyle::fg(GREY)));
            return lines;
        };

        let score = snap.score;
        lines.push(Line::new(
            format!(
                "Score {}/{} ({}%)   Streak {}",
                score.correct,
                score.total,
                score.accuracy_percent(),
                score.streak
            ),
            CellStyle::fg(WHITE).bold(),
        ));
        lines.push(Line::new(
            format!("Card {}/{}", snap.position + 1, snap.deck_len),
            CellStyle::fg(GREY),
        ));
        lines.push(Line::blank());
        lines.push(Line::new(item.name, CellStyle::fg(WHITE).bold()));
        lines.push(Line::new(item.image_ref, CellStyle::fg(GREY)));
        lines.push(Line::blank());

        match (snap.guess, snap.outcome) {
            (Some(guess), Some(correct)) => {
                let (banner, color) = if correct {
                    ("CORRECT!", GREEN)
                } else {
                    ("WRONG!", RED)
                };
                lines.push(Line::new(banner, CellStyle::fg(color).bold()));
                lines.push(Line::new(
                    format!(
                        "Answer: {}   You said: {}",
                        item.answer().label(),
                        guess.label()
                    ),
                    CellStyle::fg(WHITE),
                ));
                lines.push(Line::blank());
                for text in wrap_text(item.explanation, width) {
                    lines.push(Line::new(text, CellStyle::default()));
                }
                lines.push(Line::blank());
                lines.push(Line::new("[Enter] next", CellStyle::fg(AMBER)));
            }
            _ => {
                lines.push(Line::new(
                    format!(
                        "[←/N] {}     [→/E] {}",
                        Guess::Natural.label(),
                        Guess::Enhanced.label()
                    ),
                    CellStyle::fg(AMBER).bold(),
                ));
            }
        }

        lines.push(Line::blank());
        lines.push(Line::new("[R] reset   [Q] quit", CellStyle::fg(GREY)));
        if let Some(hint) = hint {
            lines.push(Line::new(hint, CellStyle::fg(AMBER)));
        }

        let recorder = &snap.recorder;
        if recorder.failures > 0 {
            let reason = recorder.last_error.as_deref().unwrap_or("unknown error");
            let text = format!("{} result(s) not saved: {reason}", recorder.failures);
            for part in wrap_text(&text, width) {
                lines.push(Line::new(part, CellStyle::fg(RED)));
            }
        } else if recorder.pending > 0 {
            lines.push(Line::new("saving...", CellStyle::fg(GREY)));
        }

        lines
    }
}

/// What to tell the player after a key the session rejected.
pub fn rejection_hint(snap: &SessionSnapshot) -> &'static str {
    if !snap.started {
        "Still loading, one moment"
    } else if snap.is_revealed() {
        "Already answered: press Enter for the next card"
    } else {
        "Make a guess first: [←/N] or [→/E]"
    }
}
