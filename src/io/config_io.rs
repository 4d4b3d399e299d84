use std::fs;
use std::path::{Path, PathBuf};

use crate::model::AppConfig;

/// Error type for config I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config.toml: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("could not serialize config.toml: {0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Load `config.toml` from the given config directory.
///
/// A missing file is not an error: defaults are returned and a default
/// file is written so the user has something to edit.
pub fn load_config(config_dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = config_dir.join("config.toml");
    if !path.exists() {
        let config = AppConfig::default();
        // Best-effort write of the default file
        let _ = save_config(config_dir, &config);
        return Ok(config);
    }
    let text = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    Ok(toml::from_str(&text)?)
}

/// Write `config.toml` back to the config directory.
pub fn save_config(config_dir: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    fs::create_dir_all(config_dir)?;
    let text = toml::to_string_pretty(config)?;
    fs::write(config_dir.join("config.toml"), text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_missing_file_returns_defaults_and_creates_file() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.theme, "Ordo Classic");
        assert!(dir.path().join("config.toml").exists());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.lang = Some("pt".into());
        config.theme = "Nord".into();
        config.colors.insert("header".into(), "#112233".into());

        save_config(dir.path(), &config).unwrap();
        let loaded = load_config(dir.path()).unwrap();
        assert_eq!(loaded.lang.as_deref(), Some("pt"));
        assert_eq!(loaded.theme, "Nord");
        assert_eq!(
            loaded.colors.get("header").map(String::as_str),
            Some("#112233")
        );
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "not toml {{{").unwrap();
        assert!(load_config(dir.path()).is_err());
    }
}
