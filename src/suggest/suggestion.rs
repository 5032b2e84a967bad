//! Suggestion records
//!
//! A suggestion is whatever the remote service returned: a display value
//! plus arbitrary extra fields. The extras are kept opaque and handed back
//! to the host on selection, so integrators can read structured address
//! parts without this crate knowing their schema.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Human-readable display value shown in the dropdown.
    pub value: String,
    /// Everything else the service sent, passed through untouched.
    #[serde(flatten)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl Suggestion {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            data: serde_json::Map::new(),
        }
    }
}
