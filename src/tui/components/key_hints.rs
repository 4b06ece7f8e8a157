//! # KeyHints Component
//!
//! Bottom bar listing the keys that do something on the current screen.
//! Purely presentational: screens pass their bindings as props.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

/// `(key, description)` pairs, rendered left to right.
pub type Hints = &'static [(&'static str, &'static str)];

pub const LIST_HINTS: Hints = &[
    ("↑/k", "up"),
    ("↓/j", "down"),
    ("Enter", "select"),
    ("Esc", "back"),
    ("q", "quit"),
];

pub struct KeyHints {
    pub hints: Hints,
}

impl KeyHints {
    pub fn new(hints: Hints) -> Self {
        Self { hints }
    }
}

impl Component for KeyHints {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let desc_style = Style::default().fg(Color::DarkGray);

        let mut spans = Vec::with_capacity(self.hints.len() * 3);
        for (i, (key, desc)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(" {desc}"), desc_style));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
