//! Terminal input handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use super::App;

/// Rows moved per mouse wheel notch.
const WHEEL_STEP: u16 = 3;

impl App {
    /// Handle a key press. Releases and repeats of non-scroll keys are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll.scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => self.scroll.scroll_up(),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll.scroll_page_down(),
            KeyCode::PageUp => self.scroll.scroll_page_up(),
            KeyCode::Home | KeyCode::Char('g') => self.scroll.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => self.scroll.scroll_to_bottom(),
            _ => return,
        }
        self.mark_dirty();
    }

    /// Handle mouse wheel scrolling; other mouse events are ignored.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                for _ in 0..WHEEL_STEP {
                    self.scroll.scroll_down();
                }
            }
            MouseEventKind::ScrollUp => {
                for _ in 0..WHEEL_STEP {
                    self.scroll.scroll_up();
                }
            }
            _ => return,
        }
        self.mark_dirty();
    }

    /// Record the new terminal size after a resize event.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }
}
