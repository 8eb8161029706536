use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".drift-editor.toml";

/// Load config file content from CWD first, then home directory
///
/// Searches for `.drift-editor.toml` in:
/// 1. Current working directory
/// 2. Home directory
/// 3. The platform config directory as `config.toml`
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    config_file_candidates().into_iter().find_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some(content)
    })
}

/// Paths checked by [`load_config_file`], in lookup order
pub fn config_file_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = env::var_os("HOME") {
        candidates.push(PathBuf::from(home).join(CONFIG_FILE));
    }
    if let Ok(path) = crate::app_config_path() {
        candidates.push(path);
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cwd_is_checked_first() {
        let candidates = config_file_candidates();
        assert_eq!(candidates[0], PathBuf::from(CONFIG_FILE));
    }
}
