//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/drift-editor/`, `~/.cache/drift-editor/`
//! - macOS: `~/Library/Application Support/drift-editor/`, `~/Library/Caches/drift-editor/`
//! - Windows: `%APPDATA%\drift-editor\`, `%LOCALAPPDATA%\drift-editor\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "drift-editor";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
///
/// Release builds write their log files here.
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    Ok(dir)
}

/// Get path to the app config file in the config directory
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_dir_exists() {
        // CI containers may have no HOME; only check when resolvable
        if let Ok(dir) = cache_dir() {
            assert!(dir.exists());
            assert!(dir.ends_with(APP_NAME));
        }
    }

    #[test]
    fn test_app_config_path() {
        if let Ok(path) = app_config_path() {
            assert!(path.ends_with("config.toml"));
            assert!(path.parent().is_some_and(|p| p.ends_with(APP_NAME)));
        }
    }
}
