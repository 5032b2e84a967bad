#[cfg(test)]
pub mod test_helpers {
    use std::sync::{Arc, Mutex};

    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

    use crate::app::App;
    use crate::config::{Config, SuggestConfig};
    use crate::suggest::{FetchRequest, FetchResponse, SuggestState, Suggestion, WarnSink};

    pub fn test_suggest_config() -> SuggestConfig {
        SuggestConfig {
            token: Some("test-token".to_string()),
            ..SuggestConfig::default()
        }
    }

    pub fn test_config() -> Config {
        Config {
            suggest: test_suggest_config(),
            ..Config::default()
        }
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// A suggest state wired to in-test channels instead of a live worker:
    /// the test observes outgoing requests and injects responses.
    pub fn wired_state(
        config: &SuggestConfig,
    ) -> (
        SuggestState,
        UnboundedReceiver<FetchRequest>,
        UnboundedSender<FetchResponse>,
    ) {
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (response_tx, response_rx) = mpsc::unbounded_channel();
        let mut state = SuggestState::new(config);
        state.set_channels(request_tx, response_rx);
        (state, request_rx, response_tx)
    }

    /// An app whose widget is wired to in-test channels.
    pub fn wired_app() -> (
        App,
        UnboundedReceiver<FetchRequest>,
        UnboundedSender<FetchResponse>,
    ) {
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (response_tx, response_rx) = mpsc::unbounded_channel();
        let mut app = App::new(&test_config());
        app.suggest.set_channels(request_tx, response_rx);
        (app, request_rx, response_tx)
    }

    /// Drive a full fetch round through an app: type the query, let the
    /// (zero-delay) debounce fire, answer the request with `values`.
    pub fn load_suggestions(
        app: &mut App,
        request_rx: &mut UnboundedReceiver<FetchRequest>,
        response_tx: &UnboundedSender<FetchResponse>,
        query: &str,
        values: &[&str],
    ) {
        app.set_input_text(query);
        app.suggest.on_query_change(query);
        app.tick();

        let request_id = loop {
            match request_rx.try_recv().expect("expected a fetch request") {
                FetchRequest::Query { request_id, .. } => break request_id,
                FetchRequest::Cancel { .. } => continue,
            }
        };

        let suggestions = values.iter().map(|v| Suggestion::new(*v)).collect();
        response_tx
            .send(FetchResponse::Loaded {
                suggestions,
                request_id,
            })
            .expect("widget dropped its response channel");
        app.tick();
    }

    /// Warning sink that records messages for assertions.
    #[derive(Clone, Default)]
    pub struct RecordingSink(Arc<Mutex<Vec<String>>>);

    impl RecordingSink {
        pub fn messages(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    impl WarnSink for RecordingSink {
        fn warn(&mut self, message: &str) {
            self.0.lock().unwrap().push(message.to_string());
        }
    }
}
