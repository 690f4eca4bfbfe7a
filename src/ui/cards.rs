//! Author and post cards
//!
//! Card content is built as plain lines at a known inner width so the grid
//! can size each card before drawing it.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};
use tui_scrollview::ScrollView;

use super::text::{badge_lines, wrap_text};
use super::theme::{
    COLOR_BORDER, COLOR_CARD_BG, COLOR_DIM, COLOR_MUTED, COLOR_SUBTLE, COLOR_TAG_BG, COLOR_TEXT,
};
use crate::view_state::{AuthorCard, PostCard};

/// Columns taken by border and padding (1 + 1 each side).
pub const CARD_CHROME_WIDTH: u16 = 4;

/// Rows taken by the top and bottom border.
pub const CARD_CHROME_HEIGHT: u16 = 2;

/// Inner text width for a card of the given outer width.
pub fn inner_width(card_width: u16) -> usize {
    card_width.saturating_sub(CARD_CHROME_WIDTH).max(1) as usize
}

fn wrapped(text: &str, width: usize, style: Style) -> impl Iterator<Item = Line<'static>> {
    wrap_text(text, width)
        .into_iter()
        .map(move |line| Line::styled(line, style))
}

/// Lines of an author card.
pub fn author_card_lines(card: &AuthorCard<'_>, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    lines.extend(wrapped(
        &format!("◉ {}", card.avatar),
        width,
        Style::default().fg(COLOR_DIM),
    ));
    lines.push(Line::raw(""));
    lines.extend(wrapped(
        card.name,
        width,
        Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
    ));
    lines.extend(wrapped(&card.handle(), width, Style::default().fg(COLOR_MUTED)));
    lines.push(Line::raw(""));
    lines.extend(wrapped(card.bio, width, Style::default().fg(COLOR_SUBTLE)));
    lines
}

/// Lines of a post card.
pub fn post_card_lines(card: &PostCard<'_>, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    lines.extend(wrapped(
        &format!("▣ {}", card.cover_image),
        width,
        Style::default().fg(COLOR_DIM),
    ));
    lines.push(Line::raw(""));
    lines.extend(wrapped(
        card.title,
        width,
        Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
    ));
    lines.extend(wrapped(&card.excerpt, width, Style::default().fg(COLOR_MUTED)));

    if !card.tags.is_empty() {
        lines.push(Line::raw(""));
        lines.extend(badge_lines(
            &card.tags,
            width,
            Style::default().fg(COLOR_TEXT).bg(COLOR_TAG_BG),
        ));
    }

    lines.push(Line::raw(""));
    lines.extend(wrapped(
        &card.published_label(),
        width,
        Style::default().fg(COLOR_DIM),
    ));
    lines.push(Line::from(vec![Span::styled(
        card.likes_label(),
        Style::default().fg(COLOR_MUTED),
    )]));
    lines
}

/// Outer height of a card holding `lines`.
pub fn card_height(lines: &[Line<'_>]) -> u16 {
    u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(CARD_CHROME_HEIGHT)
}

/// Draw a card frame with its content into the scroll canvas.
pub fn render_card(scroll_view: &mut ScrollView, area: Rect, lines: Vec<Line<'static>>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(COLOR_CARD_BG));

    scroll_view.render_widget(Paragraph::new(lines).block(block), area);
}
