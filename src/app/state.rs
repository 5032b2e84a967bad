use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::config::{Config, ThemeConfig};
use crate::layout::LayoutRegions;
use crate::suggest::{SuggestEvent, SuggestState, Suggestion, spawn_fetcher};

/// Application state
pub struct App {
    /// Single-line address input
    pub input: TextArea<'static>,
    /// The suggest widget this app embeds
    pub suggest: SuggestState,
    pub theme: ThemeConfig,
    /// Where the input and dropdown were last drawn, for mouse routing
    pub layout_regions: LayoutRegions,
    /// Terminal-side focus of the input field
    pub input_focused: bool,
    /// Last committed suggestion, shown in the detail pane
    pub last_selection: Option<(Suggestion, usize)>,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance. The fetch worker is wired separately
    /// via [`App::connect_fetcher`], so construction never touches the
    /// network.
    pub fn new(config: &Config) -> Self {
        let mut input = TextArea::default();
        input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Address ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        input.set_cursor_line_style(Style::default());
        if !config.suggest.query.is_empty() {
            input.insert_str(&config.suggest.query);
        }

        let mut suggest = SuggestState::new(&config.suggest);
        // The app starts with the input focused
        suggest.on_focus();

        Self {
            input,
            suggest,
            theme: config.theme.clone(),
            layout_regions: LayoutRegions::default(),
            input_focused: true,
            last_selection: None,
            status: None,
            should_quit: false,
        }
    }

    /// Spawn the background fetch worker and hand its channels to the
    /// widget.
    pub fn connect_fetcher(&mut self, endpoint: impl Into<String>) {
        let handle = spawn_fetcher(endpoint);
        self.suggest.set_channels(handle.request_tx, handle.response_rx);
    }

    pub fn query(&self) -> &str {
        self.input.lines()[0].as_ref()
    }

    /// Drive per-frame work: debounce deadlines, fetch responses, and
    /// widget notifications.
    pub fn tick(&mut self) {
        self.suggest.pump();
        while let Some(event) = self.suggest.poll_event() {
            self.apply_widget_event(event);
        }
    }

    fn apply_widget_event(&mut self, event: SuggestEvent) {
        match event {
            SuggestEvent::Focused => {}
            SuggestEvent::Blurred { first } => {
                if let Some(first) = first {
                    self.status = Some(format!("left input; top match was {}", first.value));
                }
            }
            SuggestEvent::SelectionMade { suggestion, index } => {
                self.set_input_text(&suggestion.value);
                self.status = Some(format!("selected #{}: {}", index + 1, suggestion.value));
                self.last_selection = Some((suggestion, index));
            }
        }
    }

    /// Replace the input line wholesale (selection committed, or host
    /// re-supplied the initial query).
    pub fn set_input_text(&mut self, text: &str) {
        self.input.select_all();
        self.input.cut();
        self.input.insert_str(text);
    }

    pub(crate) fn focus_input(&mut self) {
        if !self.input_focused {
            self.input_focused = true;
            self.suggest.on_focus();
        }
    }

    pub(crate) fn blur_input(&mut self) {
        if self.input_focused {
            self.input_focused = false;
            self.suggest.on_blur();
        }
    }
}
