use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::App;
use crate::suggest::render_dropdown;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(3), // Input at the top so the dropdown opens below it
            Constraint::Min(1),    // Detail pane
            Constraint::Length(1), // Status line
        ])
        .split(frame.area());

        let input_area = layout[0];

        self.render_detail_pane(frame, layout[1]);
        self.render_status_line(frame, layout[2]);
        self.render_input_field(frame, input_area);

        // Dropdown last: it overlays the detail pane. Record both regions
        // for mouse routing.
        self.layout_regions.input = Some(input_area);
        self.layout_regions.dropdown =
            render_dropdown(&self.suggest, &self.theme, frame, input_area);
    }

    fn render_input_field(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.input_focused {
            self.theme.border_color()
        } else {
            Color::DarkGray
        };

        self.input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Address ")
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(&self.input, area);
    }

    fn render_detail_pane(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Selection ")
            .border_style(Style::default().fg(Color::DarkGray));

        let text = match &self.last_selection {
            Some((suggestion, _)) => {
                let data = serde_json::to_string_pretty(&suggestion.data)
                    .unwrap_or_else(|_| "{}".to_string());
                format!("{}\n\n{}", suggestion.value, data)
            }
            None => {
                "Start typing an address, then pick a suggestion with Up/Down and Enter, \
                 or with the mouse."
                    .to_string()
            }
        };

        let content = Paragraph::new(text).block(block).wrap(Wrap { trim: false });
        frame.render_widget(content, area);
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let text = self
            .status
            .as_deref()
            .unwrap_or("Esc: leave input / quit  ·  Ctrl+C: quit");
        let line = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
