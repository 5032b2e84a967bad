//! Config file loading
//!
//! The default location is `~/.config/suggestline/config.toml`. A missing
//! default file is fine (defaults apply); a missing explicitly-passed path
//! is an error so typos do not silently run unconfigured.

use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::SuggestError;

const CONFIG_DIR: &str = "suggestline";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn load_config(explicit: Option<&Path>) -> Result<Config, SuggestError> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(SuggestError::ConfigNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => match config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(Config::default()),
        },
    };

    let raw = fs::read_to_string(&path)?;
    toml::from_str(&raw).map_err(|e| SuggestError::Config(e.to_string()))
}
