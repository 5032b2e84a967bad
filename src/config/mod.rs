mod loader;
mod types;

pub use loader::{config_path, load_config};
pub use types::{Config, SuggestConfig, ThemeConfig};
