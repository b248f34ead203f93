//! Minimal `key=value&key=value` parser for the real document's query string.

use super::unescape_amp;
use std::collections::HashMap;

/// Parsed query string. Values have [`AMP_TOKEN`](super::AMP_TOKEN) restored
/// to `&`; nothing else is decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    entries: HashMap<String, String>,
}

impl QueryMap {
    /// Parses a raw query string (no leading `?`).
    ///
    /// - entries are split on `&`, then on the first `=`
    /// - a value keeps any further `=` characters
    /// - an entry without `=` maps its key to the empty string
    /// - a repeated key keeps its last value
    pub fn parse(raw: &str) -> Self {
        let mut entries = HashMap::new();
        for entry in raw.split('&') {
            let (key, value) = entry.split_once('=').unwrap_or((entry, ""));
            entries.insert(key.to_string(), unescape_amp(value));
        }
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
