use std::path::PathBuf;

/// Resolve the directory holding the task database and UI state.
///
/// Honors `ORDO_DATA_DIR` first, then the platform convention:
/// `XDG_DATA_HOME`/`~/.local/share` on unix, `%APPDATA%` on windows.
/// The CLI `--data-dir` flag bypasses this lookup entirely.
pub fn data_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("ORDO_DATA_DIR")
        && !dir.is_empty()
    {
        return Some(PathBuf::from(dir));
    }
    platform_base_dir("XDG_DATA_HOME", ".local/share").map(|base| base.join("ordo"))
}

/// Resolve the directory holding config.toml and language overrides.
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("ORDO_CONFIG_DIR")
        && !dir.is_empty()
    {
        return Some(PathBuf::from(dir));
    }
    platform_base_dir("XDG_CONFIG_HOME", ".config").map(|base| base.join("ordo"))
}

#[cfg(not(windows))]
fn platform_base_dir(xdg_var: &str, home_fallback: &str) -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(xdg_var)
        && !dir.is_empty()
    {
        return Some(PathBuf::from(dir));
    }
    std::env::var("HOME")
        .ok()
        .filter(|h| !h.is_empty())
        .map(|home| PathBuf::from(home).join(home_fallback))
}

#[cfg(windows)]
fn platform_base_dir(_xdg_var: &str, _home_fallback: &str) -> Option<PathBuf> {
    std::env::var("APPDATA")
        .ok()
        .filter(|d| !d.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var tests mutate process state; keep them in one test to avoid
    // interference under the parallel test runner.
    #[test]
    fn override_vars_win() {
        unsafe {
            std::env::set_var("ORDO_DATA_DIR", "/tmp/ordo-data");
            std::env::set_var("ORDO_CONFIG_DIR", "/tmp/ordo-config");
        }
        assert_eq!(data_dir(), Some(PathBuf::from("/tmp/ordo-data")));
        assert_eq!(config_dir(), Some(PathBuf::from("/tmp/ordo-config")));
        unsafe {
            std::env::remove_var("ORDO_DATA_DIR");
            std::env::remove_var("ORDO_CONFIG_DIR");
        }
    }
}
