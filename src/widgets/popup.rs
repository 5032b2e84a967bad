use ratatui::{Frame, layout::Rect, widgets::Clear};

pub fn popup_below_anchor(anchor: Rect, frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = anchor.x;
    let popup_y = anchor.y.saturating_add(anchor.height);
    let room_below = frame_area
        .height
        .saturating_add(frame_area.y)
        .saturating_sub(popup_y);

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(anchor.width),
        height: height.min(room_below),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
