//! suggestline - interactive address autocomplete for the terminal
//!
//! The `suggest` module is the widget itself (state machine, debounced
//! fetcher, dropdown renderer); `app` embeds it in a small lookup
//! application used by the binary.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod suggest;
pub mod widgets;

#[cfg(test)]
mod test_utils;

pub use config::{Config, SuggestConfig, ThemeConfig};
pub use error::SuggestError;
pub use suggest::{Direction, SuggestEvent, SuggestState, Suggestion};
