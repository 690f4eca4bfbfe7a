//! Ready page rendering
//!
//! The page is laid out once per frame into a list of [`Piece`]s on a
//! virtual canvas as wide as the viewport and as tall as the content. The
//! canvas is then drawn through a [`ScrollView`] so every card is reachable
//! by scrolling.

use ratatui::{
    layout::{Alignment, Rect, Size},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use super::cards::{author_card_lines, card_height, inner_width, post_card_lines, render_card};
use super::layout::{breakpoints, column_widths, grid_columns, grid_rects};
use super::text::{badge_lines, wrap_text};
use super::theme::{
    COLOR_CARD_BG, COLOR_CATEGORY_BG, COLOR_MUTED, COLOR_PAGE_BG, COLOR_SUBTLE, COLOR_TEXT,
};
use crate::view_state::PageView;

pub const BRAND: &str = "Siva Blog";
pub const NAV_ITEMS: [&str; 3] = ["Home", "Categories", "About"];
pub const HERO_TITLE: &str = "Welcome to Blog";
pub const HERO_SUBTITLE: &str = "Explore amazing blogs from developers around the world";
pub const AUTHORS_HEADING: &str = "Our Authors";
pub const POSTS_HEADING: &str = "Latest Posts";
pub const CATEGORIES_HEADING: &str = "Explore Categories";

/// Horizontal margin between the canvas edge and page content.
const PAGE_MARGIN: u16 = 1;

/// One positioned element of the page canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum Piece {
    Navbar { area: Rect, stacked: bool },
    Hero { area: Rect, subtitle: Vec<String> },
    Heading { area: Rect, title: &'static str },
    Card { key: String, area: Rect, lines: Vec<Line<'static>> },
    Chips { keys: Vec<String>, area: Rect, lines: Vec<Line<'static>> },
}

/// Positions of everything on the ready page for a given canvas width.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub width: u16,
    pub height: u16,
    pub pieces: Vec<Piece>,
}

impl PageLayout {
    /// Lay out the page. The canvas never grows past `u16::MAX` rows; cards
    /// that would start beyond it are left out and later pieces are clamped
    /// to the last row.
    pub fn compute(page: &PageView<'_>, width: u16) -> Self {
        let mut pieces = Vec::new();
        let content_x = PAGE_MARGIN;
        let content_width = width.saturating_sub(PAGE_MARGIN * 2).max(1);
        let mut y = 0;

        // Navbar spans the full canvas; brand and nav stack on narrow screens.
        let stacked = width < breakpoints::SM_WIDTH;
        let navbar_height = if stacked { 2 } else { 1 };
        pieces.push(Piece::Navbar {
            area: Rect::new(0, y, width, navbar_height),
            stacked,
        });
        y = y.saturating_add(navbar_height + 1);

        let subtitle = wrap_text(HERO_SUBTITLE, content_width as usize);
        let hero_height = u16::try_from(subtitle.len())
            .unwrap_or(u16::MAX)
            .saturating_add(1);
        pieces.push(Piece::Hero {
            area: Rect::new(content_x, y, content_width, hero_height),
            subtitle,
        });
        y = y.saturating_add(hero_height).saturating_add(1);

        // Authors
        y = push_heading(&mut pieces, AUTHORS_HEADING, content_x, y, content_width);
        let author_cards: Vec<(String, Vec<Line<'static>>)> = {
            let text_width = card_text_width(content_width);
            page.authors
                .iter()
                .map(|card| (card.key.to_string(), author_card_lines(card, text_width)))
                .collect()
        };
        y = push_grid(&mut pieces, author_cards, content_x, y, content_width).saturating_add(1);

        // Posts
        y = push_heading(&mut pieces, POSTS_HEADING, content_x, y, content_width);
        let post_cards: Vec<(String, Vec<Line<'static>>)> = {
            let text_width = card_text_width(content_width);
            page.posts
                .iter()
                .map(|card| (card.key.to_string(), post_card_lines(card, text_width)))
                .collect()
        };
        y = push_grid(&mut pieces, post_cards, content_x, y, content_width).saturating_add(1);

        // Categories
        y = push_heading(&mut pieces, CATEGORIES_HEADING, content_x, y, content_width);
        let names: Vec<&str> = page.categories.iter().map(|c| c.name).collect();
        let lines = badge_lines(
            &names,
            content_width as usize,
            Style::default().fg(COLOR_TEXT).bg(COLOR_CATEGORY_BG),
        );
        let chips_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        pieces.push(Piece::Chips {
            keys: page.categories.iter().map(|c| c.key.to_string()).collect(),
            area: Rect::new(content_x, y, content_width, chips_height),
            lines,
        });
        y = y.saturating_add(chips_height).saturating_add(1);

        Self {
            width,
            height: y,
            pieces,
        }
    }

    /// Render keys of every card and chip, in page order.
    pub fn card_keys(&self) -> Vec<&str> {
        let mut keys = Vec::new();
        for piece in &self.pieces {
            match piece {
                Piece::Card { key, .. } => keys.push(key.as_str()),
                Piece::Chips { keys: chip_keys, .. } => {
                    keys.extend(chip_keys.iter().map(String::as_str))
                }
                _ => {}
            }
        }
        keys
    }
}

/// Text width inside a card in the narrowest column of the grid.
fn card_text_width(content_width: u16) -> usize {
    let widths = column_widths(content_width, grid_columns(content_width));
    inner_width(widths.iter().copied().min().unwrap_or(content_width))
}

fn push_heading(pieces: &mut Vec<Piece>, title: &'static str, x: u16, y: u16, width: u16) -> u16 {
    pieces.push(Piece::Heading {
        area: Rect::new(x, y, width, 1),
        title,
    });
    y.saturating_add(2)
}

fn push_grid(
    pieces: &mut Vec<Piece>,
    cards: Vec<(String, Vec<Line<'static>>)>,
    x: u16,
    y: u16,
    width: u16,
) -> u16 {
    let heights: Vec<u16> = cards.iter().map(|(_, lines)| card_height(lines)).collect();
    let (rects, used) = grid_rects(x, y, width, &heights);
    for ((key, lines), area) in cards.into_iter().zip(rects) {
        pieces.push(Piece::Card { key, area, lines });
    }
    y.saturating_add(used)
}

/// Draw the ready page into `area`, scrolled by `state`.
pub fn render_page(frame: &mut Frame, area: Rect, page: &PageView<'_>, state: &mut ScrollViewState) {
    // One column is left for the vertical scrollbar.
    let canvas_width = area.width.saturating_sub(1).max(1);
    let layout = PageLayout::compute(page, canvas_width);

    let mut scroll_view = ScrollView::new(Size::new(canvas_width, layout.height))
        .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

    scroll_view.render_widget(
        Block::default().style(Style::default().bg(COLOR_PAGE_BG)),
        Rect::new(0, 0, canvas_width, layout.height),
    );

    for piece in layout.pieces {
        render_piece(&mut scroll_view, piece);
    }

    frame.render_stateful_widget(scroll_view, area, state);
}

fn render_piece(scroll_view: &mut ScrollView, piece: Piece) {
    match piece {
        Piece::Navbar { area, stacked } => render_navbar(scroll_view, area, stacked),
        Piece::Hero { area, subtitle } => {
            let mut lines = vec![Line::styled(
                HERO_TITLE,
                Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
            )];
            lines.extend(
                subtitle
                    .into_iter()
                    .map(|l| Line::styled(l, Style::default().fg(COLOR_MUTED))),
            );
            scroll_view.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
        }
        Piece::Heading { area, title } => {
            let heading = Line::styled(
                title,
                Style::default()
                    .fg(COLOR_TEXT)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            );
            scroll_view.render_widget(Paragraph::new(heading), area);
        }
        Piece::Card { area, lines, .. } => render_card(scroll_view, area, lines),
        Piece::Chips { area, lines, .. } => {
            scroll_view.render_widget(Paragraph::new(lines), area);
        }
    }
}

fn render_navbar(scroll_view: &mut ScrollView, area: Rect, stacked: bool) {
    let bar = Style::default().bg(COLOR_CARD_BG);
    scroll_view.render_widget(Block::default().style(bar), area);

    let brand = Line::styled(
        BRAND,
        Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
    );
    let nav = Line::styled(NAV_ITEMS.join("  "), Style::default().fg(COLOR_SUBTLE));

    let inner = Rect::new(
        area.x + PAGE_MARGIN,
        area.y,
        area.width.saturating_sub(PAGE_MARGIN * 2),
        area.height,
    );

    if stacked {
        scroll_view.render_widget(Paragraph::new(vec![brand, nav]), inner);
    } else {
        scroll_view.render_widget(Paragraph::new(brand), inner);
        scroll_view.render_widget(Paragraph::new(nav).alignment(Alignment::Right), inner);
    }
}
