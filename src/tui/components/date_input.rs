//! # DateInput Component
//!
//! Single-line, length-bounded text field used for entering due dates.
//!
//! The buffer is internal state. Validation is not done here: the field
//! hands its raw text back on Enter and the owning screen decides whether
//! it is a date.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the DateInput
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInputEvent {
    /// Enter pressed; carries the current text.
    Submit(String),
    /// Esc pressed.
    Cancel,
    ContentChanged,
}

pub struct DateInput {
    buffer: String,
    /// Cursor position in chars (0..=buffer char count)
    cursor: usize,
    max_len: usize,
    pub placeholder: &'static str,
}

impl DateInput {
    pub fn new(initial: &str, max_len: usize) -> Self {
        let buffer: String = initial.chars().take(max_len).collect();
        let cursor = buffer.chars().count();
        Self {
            buffer,
            cursor,
            max_len,
            placeholder: "YYYY-MM-DD",
        }
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Byte offset of the char at `cursor`.
    fn byte_pos(&self, cursor: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }
}

impl Component for DateInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(" Due date ");

        let (text, style) = if self.buffer.is_empty() {
            (self.placeholder, Style::default().fg(Color::DarkGray))
        } else {
            (self.buffer.as_str(), Style::default().fg(Color::Green))
        };
        frame.render_widget(Paragraph::new(text).style(style).block(block), area);

        // Inside the left border, on the text row
        let x = area.x + 1 + self.cursor as u16;
        let y = area.y + 1;
        if x < area.right().saturating_sub(1) && y < area.bottom() {
            frame.set_cursor_position((x, y));
        }
    }
}

impl EventHandler for DateInput {
    type Event = DateInputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Char(c) => {
                if self.len() >= self.max_len {
                    return None;
                }
                let at = self.byte_pos(self.cursor);
                self.buffer.insert(at, *c);
                self.cursor += 1;
                Some(DateInputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                self.cursor -= 1;
                let at = self.byte_pos(self.cursor);
                self.buffer.remove(at);
                Some(DateInputEvent::ContentChanged)
            }
            TuiEvent::Delete => {
                if self.cursor >= self.len() {
                    return None;
                }
                let at = self.byte_pos(self.cursor);
                self.buffer.remove(at);
                Some(DateInputEvent::ContentChanged)
            }
            TuiEvent::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            TuiEvent::Right => {
                self.cursor = (self.cursor + 1).min(self.len());
                None
            }
            TuiEvent::Home => {
                self.cursor = 0;
                None
            }
            TuiEvent::End => {
                self.cursor = self.len();
                None
            }
            TuiEvent::Submit => Some(DateInputEvent::Submit(self.buffer.clone())),
            TuiEvent::Back => Some(DateInputEvent::Cancel),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_str(input: &mut DateInput, s: &str) {
        for c in s.chars() {
            input.handle_event(&TuiEvent::Char(c));
        }
    }

    #[test]
    fn test_prefilled_value_and_cursor_at_end() {
        let mut input = DateInput::new("2024-01-01", 10);
        assert_eq!(input.value(), "2024-01-01");
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.value(), "2024-01-0");
    }

    #[test]
    fn test_max_len_is_enforced() {
        let mut input = DateInput::new("", 10);
        type_str(&mut input, "2024-02-150000");
        assert_eq!(input.value(), "2024-02-15");
        assert_eq!(input.handle_event(&TuiEvent::Char('9')), None);
    }

    #[test]
    fn test_initial_value_is_truncated() {
        let input = DateInput::new("2024-02-15T00:00", 10);
        assert_eq!(input.value(), "2024-02-15");
    }

    #[test]
    fn test_insert_in_the_middle() {
        let mut input = DateInput::new("2024-0215", 10);
        for _ in 0..2 {
            input.handle_event(&TuiEvent::Left);
        }
        input.handle_event(&TuiEvent::Char('-'));
        assert_eq!(input.value(), "2024-02-15");
    }

    #[test]
    fn test_home_and_delete() {
        let mut input = DateInput::new("x2024", 10);
        input.handle_event(&TuiEvent::Home);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.value(), "2024");
        input.handle_event(&TuiEvent::End);
        assert_eq!(input.handle_event(&TuiEvent::Delete), None);
    }

    #[test]
    fn test_submit_and_cancel() {
        let mut input = DateInput::new("2024-02-15", 10);
        assert_eq!(
            input.handle_event(&TuiEvent::Submit),
            Some(DateInputEvent::Submit("2024-02-15".to_string()))
        );
        assert_eq!(input.handle_event(&TuiEvent::Back), Some(DateInputEvent::Cancel));
    }

    #[test]
    fn test_backspace_on_empty() {
        let mut input = DateInput::new("", 10);
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_render_shows_placeholder_when_empty() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = DateInput::new("", 10);

        terminal.draw(|f| input.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("YYYY-MM-DD"));
    }
}
