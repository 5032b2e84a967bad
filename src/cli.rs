use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Interactive address autocomplete for the terminal
#[derive(Debug, Parser)]
#[command(name = "suggestline", version, about)]
pub struct Cli {
    /// Suggestion service API token
    #[arg(long, env = "SUGGESTLINE_TOKEN")]
    pub token: Option<String>,

    /// Initial query text
    #[arg(long)]
    pub query: Option<String>,

    /// Minimum query length before fetching
    #[arg(long)]
    pub min_query_length: Option<usize>,

    /// How many suggestions to request
    #[arg(long)]
    pub max_results: Option<usize>,

    /// Debounce delay in milliseconds
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Suggestion service URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Path to a config file (default: ~/.config/suggestline/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Overlay command-line flags on top of the loaded config.
    pub fn apply(self, config: &mut Config) {
        if self.token.is_some() {
            config.suggest.token = self.token;
        }
        if let Some(query) = self.query {
            config.suggest.query = query;
        }
        if let Some(min_query_length) = self.min_query_length {
            config.suggest.min_query_length = min_query_length;
        }
        if let Some(max_results) = self.max_results {
            config.suggest.max_results = max_results;
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.suggest.debounce_ms = debounce_ms;
        }
        if let Some(endpoint) = self.endpoint {
            config.suggest.endpoint = endpoint;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "suggestline",
            "--token",
            "cli-token",
            "--max-results",
            "3",
            "--debounce-ms",
            "250",
        ]);
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.suggest.token.as_deref(), Some("cli-token"));
        assert_eq!(config.suggest.max_results, 3);
        assert_eq!(config.suggest.debounce_ms, 250);
        // untouched fields keep their config values
        assert_eq!(config.suggest.min_query_length, 2);
    }

    #[test]
    fn test_no_flags_leave_config_alone() {
        let cli = Cli::parse_from(["suggestline"]);
        let mut config = Config::default();
        config.suggest.token = Some("from-file".to_string());
        cli.apply(&mut config);

        assert_eq!(config.suggest.token.as_deref(), Some("from-file"));
    }
}
