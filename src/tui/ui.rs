//! Drawing helpers shared by every screen: the outer frame, the error body,
//! the loading body and width-aware truncation.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::Component;
use crate::tui::components::{Hints, KeyHints};

pub const APP_TITLE: &str = "Canvas Instructor";

/// Draws the bordered screen frame plus the hint bar and returns the body area.
pub fn draw_chrome(frame: &mut Frame, area: Rect, title: &str, hints: Hints) -> Rect {
    use Constraint::{Length, Min};
    let [main_area, hint_area] = Layout::vertical([Min(0), Length(1)]).areas(area);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {APP_TITLE} · {title} "))
        .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    let body = block.inner(main_area);
    frame.render_widget(block, main_area);

    KeyHints::new(hints).render(frame, hint_area);
    body
}

/// The whole body becomes the error; the hint bar stays usable.
pub fn draw_error(frame: &mut Frame, area: Rect, error: &str) {
    let paragraph = Paragraph::new(format!("Error: {error}"))
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

pub fn draw_loading(frame: &mut Frame, area: Rect, what: &str) {
    let paragraph = Paragraph::new(format!("Loading {what}..."))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}

pub fn draw_empty(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(message).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

pub fn highlight_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

pub const HIGHLIGHT_SYMBOL: &str = "> ";

/// Truncate to at most `max_width` display columns, ending in "..." when cut.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

/// Left-align `s` in a column of `width` display columns (truncating if needed).
pub fn pad_str(s: &str, width: usize) -> String {
    let cut = truncate_str(s, width);
    let fill = width.saturating_sub(cut.width());
    format!("{cut}{}", " ".repeat(fill))
}

#[cfg(test)]
pub(crate) fn buffer_text(terminal: &ratatui::Terminal<ratatui::backend::TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_untouched() {
        assert_eq!(truncate_str("Ada", 10), "Ada");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate_str("Bartholomew Fitzgerald", 10), "Barthol...");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK char is two columns wide
        let cut = truncate_str("学生学生学生", 7);
        assert_eq!(cut, "学生...");
        assert!(cut.width() <= 7);
    }

    #[test]
    fn test_truncate_tiny_width() {
        assert_eq!(truncate_str("abcdef", 2), "..");
    }

    #[test]
    fn test_pad_str() {
        assert_eq!(pad_str("ab", 5), "ab   ");
        assert_eq!(pad_str("abcdefgh", 6), "abc...");
    }
}
