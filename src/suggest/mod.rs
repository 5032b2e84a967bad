mod debouncer;
mod fetcher;
mod render;
mod state;
mod suggestion;
mod warn;

pub use debouncer::Debouncer;
pub use fetcher::{
    DADATA_SUGGEST_URL, FetchError, FetchRequest, FetchResponse, FetcherHandle, SuggestClient,
    SuggestRequest, spawn_fetcher,
};
pub use render::{render_dropdown, row_at};
pub use state::{Direction, SuggestEvent, SuggestState};
pub use suggestion::Suggestion;
pub use warn::{LogSink, WarnSink};
