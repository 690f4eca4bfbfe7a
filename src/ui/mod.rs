//! UI rendering for the blog page
//!
//! Each frame is a pure function of [`App`] state:
//! - Loading: a centered placeholder
//! - Error: the stored message, centered, in the error color
//! - Ready: navbar, hero, author and post card grids, category pills,
//!   drawn on a scrollable canvas
//!
//! A one-line key hint bar sits at the bottom in every state.
//!
//! ## Responsive Layout
//!
//! Card grids follow the width breakpoints in [`layout::breakpoints`]:
//! one column below 80 columns, two below 120, three otherwise.

pub mod cards;
pub mod layout;
pub mod page;
pub mod status;
pub mod text;
pub mod theme;

pub use layout::{breakpoints, grid_columns};
pub use page::{render_page, PageLayout, Piece};
pub use status::{render_error, render_hint_bar, render_loading, LOADING_TEXT};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::{App, LoadState};
use crate::view_state::PageView;
use theme::COLOR_PAGE_BG;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI for the current load state
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(COLOR_PAGE_BG)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    let (body, hints) = (chunks[0], chunks[1]);

    match &app.state {
        LoadState::Loading => render_loading(frame, body),
        LoadState::Error(message) => render_error(frame, body, message),
        LoadState::Ready(document) => {
            let page = PageView::project(document);
            render_page(frame, body, &page, &mut app.scroll);
        }
    }

    render_hint_bar(frame, hints);
}
