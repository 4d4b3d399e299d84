use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Configuration from config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// UI language (ISO 639-1 code). None = detect from $LANG.
    #[serde(default)]
    pub lang: Option<String>,
    /// Named color theme
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Hex color overrides applied on top of the named theme,
    /// e.g. `header = "#FFD700"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            lang: None,
            theme: default_theme(),
            colors: HashMap::new(),
        }
    }
}

fn default_theme() -> String {
    "Ordo Classic".to_string()
}

impl AppConfig {
    /// Resolve the effective language: explicit config value, else the
    /// first two letters of `$LANG`, else "en".
    pub fn effective_lang(&self) -> String {
        if let Some(lang) = &self.lang
            && !lang.is_empty()
        {
            return lang.clone();
        }
        std::env::var("LANG")
            .ok()
            .filter(|v| v.len() >= 2)
            .map(|v| v[..2].to_lowercase())
            .unwrap_or_else(|| "en".to_string())
    }
}
