//! Tests for the app render pass

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::KeyCode;

use crate::app::App;
use crate::test_utils::test_helpers::{key, load_suggestions, wired_app};

const TEST_WIDTH: u16 = 60;
const TEST_HEIGHT: u16 = 20;

fn render_to_string(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(TEST_WIDTH, TEST_HEIGHT)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_initial_render_shows_input_and_hint() {
    let (mut app, _request_rx, _response_tx) = wired_app();

    let output = render_to_string(&mut app);

    assert!(output.contains(" Address "));
    assert!(output.contains(" Selection "));
    assert!(output.contains("Start typing"));
    assert!(app.layout_regions.input.is_some());
    assert!(app.layout_regions.dropdown.is_none());
}

#[test]
fn test_dropdown_is_drawn_below_the_input() {
    let (mut app, mut request_rx, response_tx) = wired_app();
    load_suggestions(
        &mut app,
        &mut request_rx,
        &response_tx,
        "Am",
        &["Amsterdam", "Amman"],
    );

    let output = render_to_string(&mut app);

    assert!(output.contains("Amsterdam"));
    assert!(output.contains("Amman"));
    let dropdown = app.layout_regions.dropdown.expect("dropdown not recorded");
    let input = app.layout_regions.input.unwrap();
    assert_eq!(dropdown.y, input.y + input.height);
}

#[test]
fn test_blurred_app_hides_the_dropdown() {
    let (mut app, mut request_rx, response_tx) = wired_app();
    load_suggestions(
        &mut app,
        &mut request_rx,
        &response_tx,
        "Am",
        &["Amsterdam"],
    );
    app.blur_input();

    let output = render_to_string(&mut app);

    assert!(!output.contains("Amsterdam"));
    assert!(app.layout_regions.dropdown.is_none());
}

#[test]
fn test_selection_fills_detail_pane_and_status_line() {
    let (mut app, mut request_rx, response_tx) = wired_app();
    load_suggestions(
        &mut app,
        &mut request_rx,
        &response_tx,
        "Am",
        &["Amsterdam", "Amman"],
    );
    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Enter));
    app.tick();

    let output = render_to_string(&mut app);

    assert!(output.contains("selected #2: Amman"));
    // dropdown is gone after the selection
    assert!(app.layout_regions.dropdown.is_none());
}
