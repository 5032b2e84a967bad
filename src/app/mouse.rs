//! Mouse event routing
//!
//! Hover over a dropdown row highlights it; a left-button *press* on a
//! row commits the selection. Press (not release) matters: committing on
//! release would let the press blur the input first and close the
//! dropdown under the cursor.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::state::App;
use crate::layout::{Region, region_at};
use crate::suggest::row_at;

/// Route a mouse event to the component under the cursor.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Moved => handle_hover(app, mouse),
        MouseEventKind::Down(MouseButton::Left) => handle_press(app, mouse),
        _ => {}
    }
}

fn handle_hover(app: &mut App, mouse: MouseEvent) {
    let region = region_at(&app.layout_regions, mouse.column, mouse.row);
    if region != Some(Region::Dropdown) {
        return;
    }
    let Some(rect) = app.layout_regions.dropdown else {
        return;
    };
    if let Some(index) = row_at(rect, mouse.row, app.suggest.suggestions().len()) {
        app.suggest.on_hover(index);
    }
}

fn handle_press(app: &mut App, mouse: MouseEvent) {
    match region_at(&app.layout_regions, mouse.column, mouse.row) {
        Some(Region::Dropdown) => {
            let Some(rect) = app.layout_regions.dropdown else {
                return;
            };
            if let Some(index) = row_at(rect, mouse.row, app.suggest.suggestions().len()) {
                app.suggest.select(index);
            }
        }
        Some(Region::Input) => app.focus_input(),
        None => app.blur_input(),
    }
}

#[cfg(test)]
#[path = "mouse_tests.rs"]
mod mouse_tests;
