//! Message catalogs for the UI.
//!
//! Catalogs are flat `key = value` files. `en` and `pt` ship embedded in
//! the binary; a file named `<lang>.lang` under `langs/` in the config
//! directory overrides the embedded catalog for that language. Unknown
//! languages fall back to `en`; unknown keys render as the key itself so
//! a missing translation is visible instead of fatal.

use std::collections::HashMap;

const EN: &str = include_str!("langs/en.lang");
const PT: &str = include_str!("langs/pt.lang");

/// Languages shipped embedded in the binary
pub const BUILTIN_LANGS: &[&str] = &["en", "pt"];

/// A loaded message catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    /// Load the catalog for a language code ("en", "pt", ...).
    pub fn load(lang: &str) -> Catalog {
        if let Some(dir) = crate::store::paths::config_dir() {
            let override_path = dir.join("langs").join(format!("{}.lang", lang));
            if let Ok(text) = std::fs::read_to_string(&override_path) {
                return Catalog {
                    messages: parse_catalog(&text),
                };
            }
        }
        let text = match lang {
            "pt" => PT,
            _ => EN,
        };
        Catalog {
            messages: parse_catalog(text),
        }
    }

    /// Look up a message; returns the key itself when missing.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.messages.get(key).map(String::as_str).unwrap_or(key)
    }
}

/// Parse `key = value` lines, skipping blanks and `#` comments.
fn parse_catalog(text: &str) -> HashMap<String, String> {
    let mut messages = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim();
            if !key.is_empty() {
                messages.insert(key.to_string(), value.to_string());
            }
        }
    }
    messages
}
