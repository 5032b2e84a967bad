//! Key event routing
//!
//! Up/Down/Enter drive the dropdown and never reach the textarea, which
//! also keeps the input single-line. Everything else is editing; content
//! changes feed the widget's query.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::App;
use crate::suggest::Direction;

impl App {
    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            // First Esc leaves the input, second quits
            KeyCode::Esc => {
                if self.input_focused {
                    self.blur_input();
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Down => {
                self.focus_input();
                self.suggest.navigate(Direction::Next);
            }
            KeyCode::Up => {
                self.focus_input();
                self.suggest.navigate(Direction::Previous);
            }
            KeyCode::Enter => {
                self.suggest.select_focused();
            }
            _ => {
                self.focus_input();
                let content_changed = self.input.input(key);
                if content_changed {
                    let query = self.input.lines()[0].clone();
                    self.suggest.on_query_change(&query);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
