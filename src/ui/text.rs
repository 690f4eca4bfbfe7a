//! Text wrapping and badge flow.
//!
//! Cards are sized before they are drawn, so wrapping happens here rather
//! than through ratatui's `Wrap`: the number of lines returned is exactly
//! the number of rows a card needs.

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Greedy word wrap to `width` columns.
///
/// Runs of whitespace collapse to one space, explicit newlines start a new
/// line, and words wider than `width` are split across lines. Always
/// returns at least one line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();

            if word_width > width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let mut chunks = split_to_width(word, width);
                let last = chunks.pop().unwrap_or_default();
                lines.extend(chunks);
                current_width = last.width();
                current = last;
                continue;
            }

            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
            } else if current_width + 1 + word_width <= width {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
            } else {
                lines.push(std::mem::replace(&mut current, word.to_string()));
                current_width = word_width;
            }
        }

        lines.push(current);
    }

    lines
}

/// Split a single word into pieces no wider than `width`.
fn split_to_width(word: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0;

    for ch in word.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if piece_width + ch_width > width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(ch);
        piece_width += ch_width;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

/// Columns a badge for `label` occupies (one space of padding each side).
pub fn badge_width(label: &str) -> usize {
    label.width() + 2
}

/// Flow badges left to right, wrapping to new lines like inline elements.
///
/// One badge per label, in order, duplicates included. A badge wider than
/// `width` gets a line of its own. No labels means no lines.
pub fn badge_lines(labels: &[&str], width: usize, style: Style) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for label in labels {
        let w = badge_width(label);
        if !spans.is_empty() && used + 1 + w > width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
            used += 1;
        }
        spans.push(Span::styled(format!(" {} ", label), style));
        used += w;
    }

    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}
