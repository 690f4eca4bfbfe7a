//! Loading, error and hint bar rendering
//!
//! The status views draw only what they are handed; neither touches the
//! document.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};

use super::text::wrap_text;
use super::theme::{COLOR_DIM, COLOR_ERROR, COLOR_MUTED, COLOR_TEXT};

pub const LOADING_TEXT: &str = "Loading...";

/// Key hints shown in the bottom bar: (key, action).
pub const KEY_HINTS: [(&str, &str); 5] = [
    ("↑↓/jk", "scroll"),
    ("PgUp/PgDn", "page"),
    ("g/G", "top/bottom"),
    ("q", "quit"),
    ("Esc", "quit"),
];

/// Area of `height` rows centered vertically in `area`.
fn centered(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let y_offset = area.height.saturating_sub(height) / 2;
    Rect::new(area.x, area.y + y_offset, area.width, height)
}

/// Renders the loading placeholder centered in the given area
pub fn render_loading(frame: &mut Frame, area: Rect) {
    let line = Line::styled(LOADING_TEXT, Style::default().fg(COLOR_TEXT));
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered(area, 1));
}

/// Renders the error message centered in the given area, wrapped to fit
pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let width = area.width.saturating_sub(4).max(1) as usize;
    let style = Style::default()
        .fg(COLOR_ERROR)
        .add_modifier(Modifier::BOLD);
    let lines: Vec<Line> = wrap_text(message, width)
        .into_iter()
        .map(|l| Line::styled(l, style))
        .collect();

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let paragraph = Paragraph::new(Text::from(lines)).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered(area, height));
}

/// Renders the one-line key hint bar
pub fn render_hint_bar(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (i, (key, action)) in KEY_HINTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(*key, Style::default().fg(COLOR_MUTED)));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(COLOR_DIM)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_loading_is_centered() {
        let backend = TestBackend::new(40, 11);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_loading(frame, frame.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..40u16).map(|x| buffer[(x, 5u16)].symbol()).collect();
        assert_eq!(row.trim(), LOADING_TEXT);
    }

    #[test]
    fn test_error_message_is_shown() {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_error(frame, frame.area(), "Failed to fetch data"))
            .unwrap();

        assert!(buffer_text(&terminal).contains("Failed to fetch data"));
        let buffer = terminal.backend().buffer();
        let cell = (0..60u16)
            .flat_map(|x| (0..10u16).map(move |y| (x, y)))
            .map(|pos| &buffer[pos])
            .find(|c| c.symbol() == "F")
            .unwrap();
        assert_eq!(cell.fg, COLOR_ERROR);
    }

    #[test]
    fn test_long_error_wraps() {
        let message = "expected value at line 1 column 1 while parsing the people document";
        let backend = TestBackend::new(30, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_error(frame, frame.area(), message))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("expected value"));
        assert!(text.contains("document"));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let backend = TestBackend::new(5, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                render_error(frame, frame.area(), "a long message that cannot fit");
                render_loading(frame, frame.area());
            })
            .unwrap();
    }

    #[test]
    fn test_hint_bar_lists_quit() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_hint_bar(frame, frame.area()))
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("q quit"));
        assert!(text.contains("scroll"));
    }
}
