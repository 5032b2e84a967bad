//! Dropdown rendering
//!
//! Renders the suggestion dropdown directly below the input field. The
//! dropdown is drawn only while the widget is open and the list is
//! non-empty; the returned area is recorded by the caller for mouse
//! hit-testing.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::state::SuggestState;
use crate::config::ThemeConfig;
use crate::widgets::popup;

const DROPDOWN_BORDER_HEIGHT: u16 = 2;
// marker column + trailing space + borders
const ROW_PADDING: u16 = 4;
const MIN_DROPDOWN_WIDTH: u16 = 16;

/// Render the dropdown under the input field.
///
/// Returns the area it occupied, or `None` when nothing was drawn.
pub fn render_dropdown(
    state: &SuggestState,
    theme: &ThemeConfig,
    frame: &mut Frame,
    input_area: Rect,
) -> Option<Rect> {
    let suggestions = state.suggestions();
    if suggestions.is_empty() || !state.is_open() {
        return None;
    }

    let visible_count = suggestions.len().min(state.max_results());
    let height = visible_count as u16 + DROPDOWN_BORDER_HEIGHT;

    let max_value_width = suggestions
        .iter()
        .take(visible_count)
        .map(|s| s.value.width())
        .max()
        .unwrap_or(0);
    let width = (max_value_width as u16)
        .saturating_add(ROW_PADDING)
        .max(MIN_DROPDOWN_WIDTH)
        .min(input_area.width);

    let area = popup::popup_below_anchor(input_area, frame.area(), width, height);
    if area.height <= DROPDOWN_BORDER_HEIGHT {
        // No room under the input, skip rather than draw a borders-only shell
        return None;
    }

    let items: Vec<ListItem> = suggestions
        .iter()
        .take(visible_count)
        .enumerate()
        .map(|(index, suggestion)| {
            let line = if state.focused_index() == Some(index) {
                Line::from(Span::styled(
                    format!("► {}", suggestion.value),
                    Style::default()
                        .fg(theme.highlight_fg())
                        .bg(theme.highlight_bg())
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::raw(format!("  {}", suggestion.value)))
            };
            ListItem::new(line)
        })
        .collect();

    popup::clear_area(frame, area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_color())),
    );
    frame.render_widget(list, area);

    Some(area)
}

/// Map a terminal row inside the dropdown area to a suggestion index.
pub fn row_at(dropdown: Rect, row: u16, suggestion_count: usize) -> Option<usize> {
    let inner_top = dropdown.y.saturating_add(1);
    let inner_bottom = dropdown.y + dropdown.height.saturating_sub(1);
    if row < inner_top || row >= inner_bottom {
        return None;
    }
    let index = (row - inner_top) as usize;
    (index < suggestion_count).then_some(index)
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
