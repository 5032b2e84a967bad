// Configuration type definitions

use ratatui::style::Color;
use serde::Deserialize;

use crate::suggest::DADATA_SUGGEST_URL;

fn default_min_query_length() -> usize {
    2
}

fn default_max_results() -> usize {
    10
}

fn default_endpoint() -> String {
    DADATA_SUGGEST_URL.to_string()
}

/// Suggest widget configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestConfig {
    /// API credential; suggestions are disabled without one
    #[serde(default)]
    pub token: Option<String>,

    /// Initial query text shown in the input
    #[serde(default)]
    pub query: String,

    /// Minimum query length before anything is fetched
    #[serde(default = "default_min_query_length")]
    pub min_query_length: usize,

    /// How many suggestions to request (also the keyboard wrap bound)
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Idle delay before a keystroke burst turns into a request
    #[serde(default)]
    pub debounce_ms: u64,

    /// Opaque location-bias objects forwarded to the service verbatim
    #[serde(default)]
    pub locations: Vec<serde_json::Value>,

    /// Suggestion service URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            token: None,
            query: String::new(),
            min_query_length: default_min_query_length(),
            max_results: default_max_results(),
            debounce_ms: 0,
            locations: Vec::new(),
            endpoint: default_endpoint(),
        }
    }
}

fn default_border_color() -> String {
    "cyan".to_string()
}

fn default_highlight_fg() -> String {
    "black".to_string()
}

fn default_highlight_bg() -> String {
    "cyan".to_string()
}

/// Dropdown styling section
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_border_color")]
    pub border_color: String,

    #[serde(default = "default_highlight_fg")]
    pub highlight_fg: String,

    #[serde(default = "default_highlight_bg")]
    pub highlight_bg: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            border_color: default_border_color(),
            highlight_fg: default_highlight_fg(),
            highlight_bg: default_highlight_bg(),
        }
    }
}

impl ThemeConfig {
    pub fn border_color(&self) -> Color {
        parse_color(&self.border_color, Color::Cyan)
    }

    pub fn highlight_fg(&self) -> Color {
        parse_color(&self.highlight_fg, Color::Black)
    }

    pub fn highlight_bg(&self) -> Color {
        parse_color(&self.highlight_bg, Color::Cyan)
    }
}

fn parse_color(name: &str, fallback: Color) -> Color {
    name.parse().unwrap_or(fallback)
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub suggest: SuggestConfig,

    #[serde(default)]
    pub theme: ThemeConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.suggest.token, None);
        assert_eq!(config.suggest.min_query_length, 2);
        assert_eq!(config.suggest.max_results, 10);
        assert_eq!(config.suggest.debounce_ms, 0);
        assert!(config.suggest.locations.is_empty());
        assert_eq!(config.suggest.endpoint, DADATA_SUGGEST_URL);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
[suggest]
token = "secret"
max_results = 5
"#,
        )
        .unwrap();
        assert_eq!(config.suggest.token.as_deref(), Some("secret"));
        assert_eq!(config.suggest.max_results, 5);
        assert_eq!(config.suggest.min_query_length, 2);
    }

    #[test]
    fn test_locations_pass_through_as_json() {
        let config: Config = toml::from_str(
            r#"
[suggest]
locations = [{ kladr_id = "6500000000000" }, { region = "Amsterdam" }]
"#,
        )
        .unwrap();
        assert_eq!(config.suggest.locations.len(), 2);
        assert_eq!(
            config.suggest.locations[0]["kladr_id"],
            serde_json::json!("6500000000000")
        );
    }

    #[test]
    fn test_theme_color_parsing() {
        let config: Config = toml::from_str(
            r#"
[theme]
border_color = "magenta"
"#,
        )
        .unwrap();
        assert_eq!(config.theme.border_color(), Color::Magenta);
        assert_eq!(config.theme.highlight_bg(), Color::Cyan);
    }

    #[test]
    fn test_unknown_color_falls_back() {
        let theme = ThemeConfig {
            border_color: "no-such-color".to_string(),
            ..ThemeConfig::default()
        };
        assert_eq!(theme.border_color(), Color::Cyan);
    }
}
